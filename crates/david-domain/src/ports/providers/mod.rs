//! Diagnostic provider ports

/// Free disk space probe
pub mod disk;
/// Trace sink port
pub mod trace;

pub use disk::DiskSpaceProbe;
pub use trace::TraceSink;
