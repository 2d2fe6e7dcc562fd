//! Trace Sink Port
//!
//! Append-only destination of diagnostic trace rows. A sink is best-effort:
//! it never returns an error and never panics into the caller. Failures are
//! absorbed at the sink boundary and turn into a permanently disabled state.

/// Append-only trace row destination
pub trait TraceSink: Send + Sync {
    /// Name of the sink implementation
    fn sink_name(&self) -> &str;

    /// Append one row
    ///
    /// Rows written after the sink disabled itself are dropped silently.
    fn write_row(&self, fields: &[String]);

    /// Whether rows are still being recorded
    fn is_enabled(&self) -> bool;
}
