//! Capability Resolution
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CapabilityResolver`] | Loads modules once, creates and caches one instance per contract |
//! | [`BuiltinModuleLoader`] | Modules registered in the `MODULES` table |
//! | [`DirectoryModuleLoader`] | Fallback: dynamic libraries in the module directory |

pub mod capability_resolver;
pub mod loader;

pub use capability_resolver::CapabilityResolver;
pub use loader::{BuiltinModuleLoader, DirectoryModuleLoader};
