//! Trace Provider Registry
//!
//! Trace sinks register themselves in [`TRACE_PROVIDERS`] and are selected
//! by name from configuration at startup.

use david_domain::constants::{
    DEFAULT_LOCK_TIMEOUT_MS, DEFAULT_MIN_FREE_SPACE_KB, TRACE_DIRECTORY,
};
use david_domain::ports::TraceSink;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for trace provider creation
///
/// Providers use what they need and ignore the rest.
#[derive(Debug, Clone)]
pub struct TraceProviderConfig {
    /// Provider name (e.g., "csv", "memory", "null")
    pub provider: String,
    /// Directory receiving trace files
    pub directory: PathBuf,
    /// Minimum free disk space (KB) required to create a trace file
    pub min_free_space_kb: u64,
    /// Timeout of the file creation lock; zero or negative waits forever
    pub lock_timeout_ms: i64,
}

impl Default for TraceProviderConfig {
    fn default() -> Self {
        Self {
            provider: "csv".to_string(),
            directory: PathBuf::from(TRACE_DIRECTORY),
            min_free_space_kb: DEFAULT_MIN_FREE_SPACE_KB,
            lock_timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
        }
    }
}

impl TraceProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the trace directory
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Set the free space threshold
    pub fn with_min_free_space_kb(mut self, min_free_space_kb: u64) -> Self {
        self.min_free_space_kb = min_free_space_kb;
        self
    }

    /// Set the file creation lock timeout
    pub fn with_lock_timeout_ms(mut self, lock_timeout_ms: i64) -> Self {
        self.lock_timeout_ms = lock_timeout_ms;
        self
    }
}

/// Registry entry for trace providers
pub struct TraceProviderEntry {
    /// Unique provider name (e.g., "csv", "memory", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&TraceProviderConfig) -> Result<Arc<dyn TraceSink>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static TRACE_PROVIDERS: [TraceProviderEntry] = [..];

/// Resolve trace provider by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn TraceSink>)` - Created sink
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_trace_provider(config: &TraceProviderConfig) -> Result<Arc<dyn TraceSink>, String> {
    let provider_name = &config.provider;

    if let Some(entry) = TRACE_PROVIDERS.iter().find(|e| e.name == provider_name) {
        tracing::debug!(provider = entry.name, directory = %config.directory.display(), "Creating trace sink");
        return (entry.factory)(config);
    }

    let available: Vec<&str> = TRACE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown trace provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered trace providers
///
/// Returns a list of (name, description) tuples.
pub fn list_trace_providers() -> Vec<(&'static str, &'static str)> {
    TRACE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
