//! Module Loader Port
//!
//! The capability resolver asks loaders for module definitions by name. The
//! built-in loader reads the [`MODULES`](super::registry::MODULES) table; the
//! fallback loader searches a directory for dynamic libraries.

use super::registry::ModuleDefinition;
use david_domain::error::Result;

/// Source of module definitions
pub trait ModuleLoader: Send + Sync {
    /// Name of the loader for diagnostics
    fn loader_name(&self) -> &str;

    /// Load the module named `name`
    ///
    /// Returns `Ok(None)` when this loader does not know the module and
    /// `Err` when the module exists but cannot be loaded.
    fn load(&self, name: &str) -> Result<Option<ModuleDefinition>>;
}
