//! Null trace sink
//!
//! A sink that is permanently disabled. Selecting it turns the diagnostic
//! trace off without touching the instrumented code.

use david_domain::ports::TraceSink;

/// Trace sink that records nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTraceSink;

impl NullTraceSink {
    /// Create a new null sink
    pub fn new() -> Self {
        Self
    }
}

impl TraceSink for NullTraceSink {
    fn sink_name(&self) -> &str {
        "null"
    }

    fn write_row(&self, _fields: &[String]) {}

    fn is_enabled(&self) -> bool {
        false
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use david_application::ports::registry::{TRACE_PROVIDERS, TraceProviderConfig, TraceProviderEntry};

#[linkme::distributed_slice(TRACE_PROVIDERS)]
static NULL_TRACE_PROVIDER: TraceProviderEntry = TraceProviderEntry {
    name: "null",
    description: "Disabled trace sink (records nothing)",
    factory: |_config: &TraceProviderConfig| Ok(std::sync::Arc::new(NullTraceSink::new())),
};
