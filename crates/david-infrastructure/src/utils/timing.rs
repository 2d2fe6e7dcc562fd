//! Elapsed time of traced operations

use std::time::{Duration, Instant};

/// Measures how long a traced operation took
///
/// # Example
///
/// ```
/// use david_infrastructure::utils::TimedOperation;
///
/// let timer = TimedOperation::start();
/// assert!(timer.elapsed_ms() < 60_000);
/// assert!(timer.end_info().ends_with(" ms"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimedOperation {
    started: Instant,
}

impl TimedOperation {
    /// Start measuring now
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Whole milliseconds since start, saturating
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Time since start
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Elapsed time as a trace annotation, e.g. `12 ms`
    pub fn end_info(&self) -> String {
        format!("{} ms", self.elapsed_ms())
    }
}
