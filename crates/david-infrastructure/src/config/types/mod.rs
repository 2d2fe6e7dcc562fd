//! Configuration types module

pub mod app;
pub mod logging;
pub mod runtime;
pub mod trace;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use runtime::{LockConfig, RuntimeConfig};
pub use trace::TraceConfig;
