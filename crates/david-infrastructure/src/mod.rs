//! # Infrastructure Layer
//!
//! Process-wide services of the DAVID host runtime.
//!
//! ### Capabilities
//! | Module | Description |
//! |--------|-------------|
//! | [`resolver`] | Capability resolver, built-in and directory module loaders |
//! | [`context`] | Process context and its lazily initialized cell |
//! | [`persistence`] | Entity creation by identifier, attached to the database capability |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Centralized configuration constants |
//! | [`diagnostics`] | Process-wide diagnostic tracer |
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod context;
pub mod diagnostics;
pub mod error_ext;
pub mod logging;
pub mod persistence;
pub mod resolver;
pub mod utils;

// Re-export commonly used types
pub use context::{ProcessContext, ProcessContextCell, init_process_context, process_context};
pub use error_ext::ErrorContext;
pub use resolver::CapabilityResolver;
pub use utils::TimedOperation;
