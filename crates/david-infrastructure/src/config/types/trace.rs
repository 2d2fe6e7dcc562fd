//! Diagnostic trace configuration types

use david_domain::constants::{DEFAULT_MIN_FREE_SPACE_KB, TRACE_DIRECTORY};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Diagnostic trace configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Trace sink implementation ("csv", "memory", "null")
    pub provider: String,

    /// Trace file directory, relative to the base directory
    pub directory: PathBuf,

    /// Free disk space (KB) required before the trace file is created
    pub min_free_space_kb: u64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            provider: "csv".to_string(),
            directory: PathBuf::from(TRACE_DIRECTORY),
            min_free_space_kb: DEFAULT_MIN_FREE_SPACE_KB,
        }
    }
}
