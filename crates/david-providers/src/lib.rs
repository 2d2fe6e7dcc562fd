//! # DAVID Host Runtime - Provider Implementations
//!
//! Implementations of the ports defined in `david-domain`, registered in the
//! linkme tables declared by `david-application`.
//!
//! | Category | Port / Table | Implementations |
//! |----------|--------------|-----------------|
//! | Trace sink | `TraceSink` / `TRACE_PROVIDERS` | CSV file, Memory, Null |
//! | Disk space | `DiskSpaceProbe` | Sysinfo, Static |
//! | Modules | `MODULES` | Socket server, File database, App base |
//!
//! Link this crate (`extern crate david_providers;` in tests) to make its
//! entries visible to the registries.

// Re-export david-domain types commonly used with providers
pub use david_domain::error::{Error, Result};
pub use david_domain::ports::{DiskSpaceProbe, TraceSink};

/// Provider-specific constants
pub mod constants;

/// Free disk space probes
pub mod disk;

/// Trace sink implementations
pub mod trace;

/// Built-in modules
pub mod modules;
