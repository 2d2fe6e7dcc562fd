//! # Domain Layer
//!
//! Core types of the DAVID host runtime. Nothing in here performs I/O.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Domain constants (timeouts, trace format, reserved names) |
//! | [`value_objects`] | Contracts, module descriptors, trace events, key values |
//! | [`ports`] | Capability and provider traits implemented outside the domain |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
