//! Module loaders

use crate::error_ext::ErrorContext;
use david_application::ports::ModuleLoader;
use david_application::ports::registry::{ModuleDefinition, ModuleRegistrar, find_module};
use david_domain::constants::{MODULE_REGISTER_SYMBOL, RESERVED_MODULE_PREFIX};
use david_domain::error::Result;
use david_domain::value_objects::ModuleDescriptor;
use libloading::{Library, Symbol};
use std::env::consts::{DLL_EXTENSION, DLL_PREFIX};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Loads modules registered in the `MODULES` table
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinModuleLoader;

impl BuiltinModuleLoader {
    /// Create a new built-in loader
    pub fn new() -> Self {
        Self
    }
}

impl ModuleLoader for BuiltinModuleLoader {
    fn loader_name(&self) -> &str {
        "builtin"
    }

    fn load(&self, name: &str) -> Result<Option<ModuleDefinition>> {
        Ok(find_module(name).map(|entry| entry.build()))
    }
}

/// Signature of the registration function exported by `export_module!`
type RegisterFn = fn(&mut ModuleRegistrar);

/// Libraries stay mapped for the life of the process; factories registered
/// by a module point into its code.
static LOADED_LIBRARIES: Mutex<Vec<Library>> = Mutex::new(Vec::new());

/// Fallback loader searching a directory for dynamic libraries
///
/// Looks for `<name>.<ext>` and then `<prefix><name>.<ext>` using the
/// platform's dynamic library prefix and extension. Names starting with the
/// reserved `system.` prefix are never searched.
#[derive(Debug, Clone)]
pub struct DirectoryModuleLoader {
    directory: PathBuf,
}

impl DirectoryModuleLoader {
    /// Loader searching `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory searched for libraries
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Library file of module `name`, if present
    pub fn library_path(&self, name: &str) -> Option<PathBuf> {
        [
            format!("{name}.{DLL_EXTENSION}"),
            format!("{DLL_PREFIX}{name}.{DLL_EXTENSION}"),
        ]
        .into_iter()
        .map(|file_name| self.directory.join(file_name))
        .find(|path| path.is_file())
    }

    #[allow(unsafe_code)]
    fn load_library(&self, name: &str, path: &Path) -> Result<ModuleDefinition> {
        // SAFETY: loading runs the library's initializers; module libraries
        // are trusted code placed in the module directory by the operator.
        let library = unsafe { Library::new(path) }
            .module_context(name, format!("cannot open {}", path.display()))?;

        let mut registrar = ModuleRegistrar::new(ModuleDescriptor::file(name, path));
        {
            // SAFETY: the symbol is emitted by `export_module!` with the
            // `RegisterFn` signature.
            let register: Symbol<'_, RegisterFn> =
                unsafe { library.get(MODULE_REGISTER_SYMBOL.as_bytes()) }.module_context(
                    name,
                    format!("missing symbol '{MODULE_REGISTER_SYMBOL}'"),
                )?;
            register(&mut registrar);
        }

        LOADED_LIBRARIES
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(library);
        Ok(registrar.finish())
    }
}

impl ModuleLoader for DirectoryModuleLoader {
    fn loader_name(&self) -> &str {
        "directory"
    }

    fn load(&self, name: &str) -> Result<Option<ModuleDefinition>> {
        if name.starts_with(RESERVED_MODULE_PREFIX) {
            tracing::debug!(module = name, "Reserved module name, fallback skipped");
            return Ok(None);
        }
        let Some(path) = self.library_path(name) else {
            tracing::debug!(module = name, directory = %self.directory.display(), "No module library found");
            return Ok(None);
        };

        tracing::debug!(module = name, path = %path.display(), "Loading module library");
        self.load_library(name, &path).map(Some)
    }
}
