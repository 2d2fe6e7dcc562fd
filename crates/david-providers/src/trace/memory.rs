//! In-memory trace sink
//!
//! Keeps every row in a buffer. Useful for tests and for inspecting the
//! trace of a running process without touching the disk.

use david_domain::ports::TraceSink;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Trace sink buffering rows in memory
#[derive(Debug)]
pub struct MemoryTraceSink {
    rows: Mutex<Vec<Vec<String>>>,
    enabled: AtomicBool,
}

impl MemoryTraceSink {
    /// Create an empty, enabled sink
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            enabled: AtomicBool::new(true),
        }
    }

    /// Copy of all recorded rows
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.buffer().clone()
    }

    /// Number of recorded rows
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    /// Whether no row was recorded
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    /// Drop all recorded rows
    pub fn clear(&self) {
        self.buffer().clear();
    }

    /// Turn recording on or off
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<Vec<String>>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryTraceSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceSink for MemoryTraceSink {
    fn sink_name(&self) -> &str {
        "memory"
    }

    fn write_row(&self, fields: &[String]) {
        if self.is_enabled() {
            self.buffer().push(fields.to_vec());
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use david_application::ports::registry::{TRACE_PROVIDERS, TraceProviderConfig, TraceProviderEntry};

#[linkme::distributed_slice(TRACE_PROVIDERS)]
static MEMORY_TRACE_PROVIDER: TraceProviderEntry = TraceProviderEntry {
    name: "memory",
    description: "In-process trace row buffer",
    factory: |_config: &TraceProviderConfig| Ok(std::sync::Arc::new(MemoryTraceSink::new())),
};
