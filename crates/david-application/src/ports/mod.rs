//! Application ports
//!
//! - [`registry`] - compile-time registration tables for modules and trace providers
//! - [`loader`] - port through which the resolver obtains module definitions

pub mod loader;
pub mod registry;

pub use loader::ModuleLoader;
