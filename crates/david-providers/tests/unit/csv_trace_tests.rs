//! Tests for the CSV trace sink

use david_application::Tracer;
use david_domain::ports::TraceSink;
use david_domain::value_objects::TraceLevel;
use david_providers::disk::StaticDiskSpace;
use david_providers::trace::CsvTraceSink;
use david_providers::trace::csv::{encode_field, encode_row};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::TempDir;

const HEADER: &str = "DateTime;Level;State;Type;Methode;Keyword";

fn sink_with_space(directory: &Path, available_kb: u64) -> CsvTraceSink {
    CsvTraceSink::with_probe(
        directory,
        1_000,
        5_000,
        Arc::new(StaticDiskSpace::new(available_kb)),
    )
}

fn trace_files(directory: &Path) -> Vec<PathBuf> {
    match fs::read_dir(directory) {
        Ok(entries) => entries
            .map(|entry| entry.expect("directory entry").path())
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("trace file readable")
        .lines()
        .map(str::to_string)
        .collect()
}

fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| (*f).to_string()).collect()
}

#[test]
fn test_file_created_lazily_with_header() {
    let temp = TempDir::new().expect("temp dir");
    let directory = temp.path().join("Trace");
    let sink = sink_with_space(&directory, 10_000);

    assert!(sink.file_path().is_none());
    assert!(trace_files(&directory).is_empty());

    sink.write_row(&row(&["a", "b"]));
    sink.write_row(&row(&["c"]));

    let files = trace_files(&directory);
    assert_eq!(files.len(), 1);
    let path = sink.file_path().expect("file created");
    assert_eq!(files[0], path);
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));
    let stem = path.file_stem().and_then(|s| s.to_str()).expect("file stem");
    assert!(stem.parse::<i64>().is_ok(), "file name is a nanosecond timestamp: {stem}");

    assert_eq!(read_lines(path), vec![HEADER, "a;b", "c"]);
}

#[test]
fn test_insufficient_disk_space_disables_silently() {
    let temp = TempDir::new().expect("temp dir");
    let directory = temp.path().join("Trace");
    let sink = sink_with_space(&directory, 999);

    sink.write_row(&row(&["a"]));
    sink.write_row(&row(&["b"]));

    assert!(!sink.is_enabled());
    assert!(sink.file_path().is_none());
    assert!(trace_files(&directory).is_empty());
}

#[test]
fn test_unknown_disk_space_keeps_sink_enabled() {
    let temp = TempDir::new().expect("temp dir");
    let sink = CsvTraceSink::with_probe(
        temp.path(),
        u64::MAX,
        5_000,
        Arc::new(StaticDiskSpace::unknown()),
    );

    sink.write_row(&row(&["a"]));

    assert!(sink.is_enabled());
    assert!(sink.file_path().is_some());
}

#[test]
fn test_io_failure_disables_permanently() {
    let temp = TempDir::new().expect("temp dir");
    // A regular file where the trace directory should be
    let blocker = temp.path().join("Trace");
    fs::write(&blocker, "not a directory").expect("write blocker");
    let sink = sink_with_space(&blocker, 10_000);

    sink.write_row(&row(&["a"]));
    assert!(!sink.is_enabled());

    fs::remove_file(&blocker).expect("remove blocker");
    sink.write_row(&row(&["b"]));
    assert!(!sink.is_enabled());
    assert!(!blocker.exists());
}

#[test]
fn test_fields_are_quoted_when_needed() {
    assert_eq!(encode_field("plain"), "plain");
    assert_eq!(encode_field("a;b"), "\"a;b\"");
    assert_eq!(encode_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(encode_field("two\nlines"), "\"two\nlines\"");
    assert_eq!(encode_row(&row(&["x", "", "y;z"])), "x;;\"y;z\"\n");
}

#[test]
fn test_scope_rows_written_to_file() {
    let temp = TempDir::new().expect("temp dir");
    let sink = Arc::new(sink_with_space(temp.path(), 10_000));
    let tracer = Tracer::new(Arc::clone(&sink) as Arc<dyn TraceSink>);

    {
        let mut scope = tracer.begin_scope(
            TraceLevel::Info,
            "CapabilityResolver",
            "resolve",
            None,
            &["dyn SocketServer", "david-socket-server"],
        );
        scope.add_end_info(["created"]);
    }

    let lines = read_lines(sink.file_path().expect("file created"));
    assert_eq!(lines.len(), 3);
    let begin: Vec<&str> = lines[1].split(';').collect();
    let end: Vec<&str> = lines[2].split(';').collect();
    assert_eq!(
        &begin[1..],
        ["Info", "B", "CapabilityResolver", "resolve", "", "dyn SocketServer", "david-socket-server"]
    );
    assert_eq!(&end[1..], ["Info", "E", "CapabilityResolver", "resolve", "", "created"]);
    assert_eq!(begin[0].len(), "2026-01-01 00:00:00.000000".len());
}

#[test]
fn test_concurrent_first_writes_create_one_file() {
    const WRITERS: usize = 8;

    let temp = TempDir::new().expect("temp dir");
    let sink = Arc::new(sink_with_space(temp.path(), 10_000));
    let barrier = Arc::new(Barrier::new(WRITERS));

    let handles: Vec<_> = (0..WRITERS)
        .map(|index| {
            let sink = Arc::clone(&sink);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                sink.write_row(&[format!("writer-{index}"), "x".repeat(256)]);
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread");
    }

    let files = trace_files(temp.path());
    assert_eq!(files.len(), 1);
    let lines = read_lines(&files[0]);
    assert_eq!(lines.len(), WRITERS + 1);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines.iter().filter(|l| l.as_str() == HEADER).count(), 1);
    for line in &lines[1..] {
        assert!(line.starts_with("writer-"), "interleaved line: {line}");
        assert_eq!(line.len(), "writer-0;".len() + 256);
    }
}
