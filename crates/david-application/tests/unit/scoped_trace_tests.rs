//! Tests for scoped tracing

use david_application::Tracer;
use david_domain::value_objects::TraceLevel;
use david_domain::{Error, Result};
use david_providers::trace::MemoryTraceSink;
use std::sync::Arc;

fn memory_tracer() -> (Tracer, Arc<MemoryTraceSink>) {
    let sink = Arc::new(MemoryTraceSink::new());
    (Tracer::new(Arc::clone(&sink) as _), sink)
}

fn states(sink: &MemoryTraceSink) -> Vec<String> {
    sink.rows().into_iter().map(|row| row[2].clone()).collect()
}

#[test]
fn test_scope_writes_begin_and_end() {
    let (tracer, sink) = memory_tracer();
    {
        let _scope = tracer.begin_scope(
            TraceLevel::Debug,
            "Resolver",
            "resolve",
            Some("socket"),
            &["first", "second"],
        );
        assert_eq!(states(&sink), vec!["B"]);
    }

    let rows = sink.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][1], "Debug");
    assert_eq!(rows[0][3], "Resolver");
    assert_eq!(rows[0][4], "resolve");
    assert_eq!(rows[0][5], "socket");
    assert_eq!(&rows[0][6..], ["first", "second"]);
    assert_eq!(rows[1][2], "E");
    assert_eq!(rows[1][5], "socket");
}

#[test]
fn test_end_info_keeps_insertion_order() {
    let (tracer, sink) = memory_tracer();
    let mut scope = tracer.begin_scope(TraceLevel::Info, "Host", "start", None, &[]);
    scope.add_end_info(["a", "b"]);
    scope.add_end_info(vec!["c".to_string()]);
    drop(scope);

    let rows = sink.rows();
    assert_eq!(rows[1][2], "E");
    assert_eq!(rows[1][5], "");
    assert_eq!(&rows[1][6..], ["a", "b", "c"]);
}

#[test]
fn test_end_written_once_on_error_path() {
    fn failing(tracer: &Tracer) -> Result<()> {
        let _scope = tracer.begin_scope(TraceLevel::Error, "Job", "run", None, &[]);
        Err(Error::invalid_argument("boom"))?;
        Ok(())
    }

    let (tracer, sink) = memory_tracer();
    assert!(failing(&tracer).is_err());
    assert_eq!(states(&sink), vec!["B", "E"]);
}

#[test]
fn test_explicit_close_is_idempotent() {
    let (tracer, sink) = memory_tracer();
    let mut scope = tracer.begin_scope(TraceLevel::Info, "Host", "stop", None, &[]);
    assert!(scope.is_open());

    scope.close();
    assert!(!scope.is_open());
    scope.add_end_info(["late"]);
    scope.close();
    drop(scope);

    let rows = sink.rows();
    assert_eq!(states(&sink), vec!["B", "E"]);
    assert_eq!(rows[1].len(), 6);
}

#[test]
fn test_nested_scopes_close_inner_first() {
    let (tracer, sink) = memory_tracer();
    {
        let _outer = tracer.begin_scope(TraceLevel::Info, "Outer", "a", None, &[]);
        let _inner = tracer.begin_scope(TraceLevel::Info, "Inner", "b", None, &[]);
    }

    let origins: Vec<(String, String)> = sink
        .rows()
        .into_iter()
        .map(|row| (row[2].clone(), row[3].clone()))
        .collect();
    assert_eq!(
        origins,
        vec![
            ("B".to_string(), "Outer".to_string()),
            ("B".to_string(), "Inner".to_string()),
            ("E".to_string(), "Inner".to_string()),
            ("E".to_string(), "Outer".to_string()),
        ]
    );
}

#[test]
fn test_state_event() {
    let (tracer, sink) = memory_tracer();
    tracer.write(TraceLevel::Warning, "Host", "tick", Some("k"), &["x"]);

    let rows = sink.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], "Warning");
    assert_eq!(rows[0][2], "S");
    assert_eq!(&rows[0][5..], ["k", "x"]);
}

#[test]
fn test_disabled_sink_records_nothing() {
    let sink = Arc::new(MemoryTraceSink::new());
    sink.set_enabled(false);
    let tracer = Tracer::new(Arc::clone(&sink) as _);

    assert!(!tracer.is_enabled());
    let mut scope = tracer.begin_scope(TraceLevel::Info, "Host", "start", None, &[]);
    assert!(!scope.is_open());
    scope.add_end_info(["ignored"]);
    drop(scope);
    tracer.write(TraceLevel::Info, "Host", "tick", None, &[]);

    assert!(sink.rows().is_empty());
}

#[test]
fn test_disabled_tracer_is_inert() {
    let tracer = Tracer::disabled();

    assert_eq!(tracer.sink_name(), "disabled");
    assert!(!tracer.is_enabled());
    let scope = tracer.begin_scope(TraceLevel::Info, "Host", "start", None, &[]);
    assert!(!scope.is_open());
}
