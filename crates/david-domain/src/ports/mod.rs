//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and the outer layers.
//!
//! - **capabilities/** - contracts resolved from modules (socket server, database, entities)
//! - **providers/** - diagnostic providers (trace sink, disk space probe)

/// Capability contracts resolved from loadable modules
pub mod capabilities;
/// Diagnostic provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use capabilities::{Database, Entity, SocketServer};
pub use providers::{DiskSpaceProbe, TraceSink};
