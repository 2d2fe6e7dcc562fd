//! Configuration
//!
//! [`AppConfig`] defaults merged with an optional TOML file and `DAVID__`
//! prefixed environment variables by [`ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LockConfig, LoggingConfig, RuntimeConfig, TraceConfig};
