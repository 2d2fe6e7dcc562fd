//! Trace Sink Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`CsvTraceSink`] | File | Semicolon-separated rows in `<trace dir>/<unix-nanos>.csv` |
//! | [`MemoryTraceSink`] | Local | In-process row buffer |
//! | [`NullTraceSink`] | Testing | Records nothing |

pub mod csv;
pub mod memory;
pub mod null;

// Re-export for convenience
pub use csv::CsvTraceSink;
pub use memory::MemoryTraceSink;
pub use null::NullTraceSink;
