//! Main application configuration

use super::{LockConfig, LoggingConfig, RuntimeConfig, TraceConfig};
use david_application::ports::registry::TraceProviderConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Module resolution settings
    pub runtime: RuntimeConfig,

    /// Diagnostic trace settings
    pub trace: TraceConfig,

    /// Bounded mutex settings
    pub lock: LockConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Base directory all relative paths are resolved against
    ///
    /// Falls back to the executable's directory, then to the working directory.
    pub fn base_dir(&self) -> PathBuf {
        if let Some(base_dir) = &self.runtime.base_dir {
            return base_dir.clone();
        }
        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Directory searched by the fallback module loader
    pub fn module_directory(&self) -> PathBuf {
        self.base_dir().join(&self.runtime.module_dir)
    }

    /// Directory receiving trace files
    pub fn trace_directory(&self) -> PathBuf {
        self.base_dir().join(&self.trace.directory)
    }

    /// Trace sink selection derived from this configuration
    pub fn trace_provider_config(&self) -> TraceProviderConfig {
        TraceProviderConfig::new(self.trace.provider.clone())
            .with_directory(self.trace_directory())
            .with_min_free_space_kb(self.trace.min_free_space_kb)
            .with_lock_timeout_ms(self.lock.timeout_ms)
    }
}
