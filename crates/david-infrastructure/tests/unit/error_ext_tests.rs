//! Tests for error context extensions

use david_domain::Error;
use david_infrastructure::ErrorContext;
use std::io;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "missing file"))
}

#[test]
fn test_io_context() {
    let err = io_failure().io_context("Failed to read").expect_err("io error");
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(err.to_string(), "I/O error: Failed to read: missing file");
}

#[test]
fn test_config_context() {
    let err = io_failure()
        .config_context("Bad config")
        .expect_err("config error");
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("Bad config: missing file"));
}

#[test]
fn test_module_context() {
    let err = io_failure()
        .module_context("plugin", "cannot open")
        .expect_err("module error");
    match &err {
        Error::ModuleLoad { module, message, source } => {
            assert_eq!(module, "plugin");
            assert_eq!(message, "cannot open: missing file");
            assert!(source.is_some());
        }
        other => panic!("Expected ModuleLoad, got {other:?}"),
    }
    assert!(err.is_resolution_error());
}

#[test]
fn test_lazy_context() {
    let ok: Result<u8, io::Error> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context evaluated on success") })
        .expect("ok value");
    assert_eq!(value, 7);

    let err = io_failure()
        .with_context(|| format!("step {}", 3))
        .expect_err("infrastructure error");
    assert!(matches!(err, Error::Infrastructure { .. }));
    assert!(err.to_string().contains("step 3: missing file"));
}
