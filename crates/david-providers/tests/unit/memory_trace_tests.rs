//! Tests for the memory and null trace sinks

use david_application::ports::registry::{TraceProviderConfig, resolve_trace_provider};
use david_domain::ports::TraceSink;
use david_providers::trace::{MemoryTraceSink, NullTraceSink};

#[test]
fn test_memory_sink_buffers_rows() {
    let sink = MemoryTraceSink::new();
    assert!(sink.is_empty());

    sink.write_row(&["a".to_string(), "b".to_string()]);
    sink.write_row(&["c".to_string()]);

    assert_eq!(sink.len(), 2);
    assert_eq!(sink.rows()[1], vec!["c".to_string()]);

    sink.clear();
    assert!(sink.is_empty());
}

#[test]
fn test_memory_sink_can_be_disabled() {
    let sink = MemoryTraceSink::new();
    sink.set_enabled(false);
    sink.write_row(&["a".to_string()]);

    assert!(!sink.is_enabled());
    assert!(sink.is_empty());
}

#[test]
fn test_null_sink_is_disabled() {
    let sink = NullTraceSink::new();
    sink.write_row(&["a".to_string()]);

    assert_eq!(sink.sink_name(), "null");
    assert!(!sink.is_enabled());
}

#[test]
fn test_csv_provider_uses_configured_directory() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let config = TraceProviderConfig::new("csv")
        .with_directory(temp.path().join("Trace"))
        .with_min_free_space_kb(0);

    let sink = resolve_trace_provider(&config).expect("csv provider is registered");
    assert_eq!(sink.sink_name(), "csv");
    sink.write_row(&["a".to_string()]);

    assert!(temp.path().join("Trace").is_dir());
}
