//! Runtime configuration types

use david_domain::constants::{
    DEFAULT_DATABASE_MODULE, DEFAULT_LOCK_TIMEOUT_MS, DEFAULT_MODULE_DIRECTORY,
    DEFAULT_SOCKET_SERVER_MODULE,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Host runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Base directory; the executable's directory when unset
    pub base_dir: Option<PathBuf>,

    /// Directory searched by the fallback module loader, relative to the base directory
    pub module_dir: PathBuf,

    /// Module providing the socket server capability
    pub socket_server_module: String,

    /// Module providing the database capability
    pub database_module: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            module_dir: PathBuf::from(DEFAULT_MODULE_DIRECTORY),
            socket_server_module: DEFAULT_SOCKET_SERVER_MODULE.to_string(),
            database_module: DEFAULT_DATABASE_MODULE.to_string(),
        }
    }
}

/// Bounded mutex configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    /// Timeout in milliseconds; zero or negative waits forever
    pub timeout_ms: i64,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
        }
    }
}
