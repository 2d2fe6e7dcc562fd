//! # DAVID
//!
//! Host runtime resolving capabilities from named modules.
//!
//! A module is a named unit of declarations, either linked into the host or
//! loaded from the module directory. The process context resolves the
//! capabilities the host needs from those modules, one instance per
//! contract, and every step is recorded in the diagnostic trace.
//!
//! ## Example
//!
//! ```ignore
//! use david::infrastructure::config::ConfigLoader;
//!
//! let config = ConfigLoader::new().load()?;
//! let context = david::start(config)?;
//! println!("{}", context.socket_server().server_name());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - contracts, errors and value objects
//! - `application` - module and trace provider registries, bounded mutex, scoped tracing
//! - `providers` - trace sinks and built-in modules
//! - `infrastructure` - capability resolver, process context, configuration and logging

use david_domain::value_objects::TraceLevel;
use david_infrastructure::config::AppConfig;
use david_infrastructure::constants::{PROGRAM_INIT_OPERATION, PROGRAM_TRACE_ORIGIN};
use david_infrastructure::diagnostics::install_trace_provider;
use david_infrastructure::{ProcessContext, init_process_context, process_context};
use std::sync::Arc;

/// Domain layer - contracts, errors and value objects
pub mod domain {
    pub use david_domain::*;
}

/// Application layer - registries, synchronization and tracing
pub mod application {
    pub use david_application::*;
}

/// Providers - trace sinks and built-in modules
pub mod providers {
    pub use david_providers::*;
}

/// Infrastructure layer - resolver, process context and configuration
pub mod infrastructure {
    pub use david_infrastructure::*;
}

pub use domain::{Error, Result};

/// Install the process tracer and initialize the process context
///
/// Writes the program start row before the context is built. The first call
/// creates the process context cell with the configured lock timeout. A
/// context that already exists is returned as is.
pub fn start(config: AppConfig) -> Result<Arc<ProcessContext>> {
    let tracer = install_trace_provider(&config.trace_provider_config())?;
    tracer.write(
        TraceLevel::Info,
        PROGRAM_TRACE_ORIGIN,
        PROGRAM_INIT_OPERATION,
        None,
        &[env!("CARGO_PKG_VERSION")],
    );

    let cell = init_process_context(config.lock.timeout_ms);
    let config = Arc::new(config);
    cell.get_or_init(|| ProcessContext::new(Arc::clone(&config), tracer.clone()))
}

/// Shut the process context down
pub fn stop() -> Result<()> {
    process_context().shutdown()
}
