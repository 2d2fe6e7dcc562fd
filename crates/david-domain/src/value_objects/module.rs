//! Module descriptors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where a module was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleLocation {
    /// Linked into the host and registered in the module table
    Builtin,
    /// Loaded from a library file by the fallback loader
    File(PathBuf),
}

impl fmt::Display for ModuleLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A named, loadable unit of code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Logical module name
    pub name: String,
    /// Location the module was loaded from
    pub location: ModuleLocation,
}

impl ModuleDescriptor {
    /// Descriptor of a module registered in the host
    pub fn builtin<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            location: ModuleLocation::Builtin,
        }
    }

    /// Descriptor of a module loaded from a file
    pub fn file<S: Into<String>, P: Into<PathBuf>>(name: S, path: P) -> Self {
        Self {
            name: name.into(),
            location: ModuleLocation::File(path.into()),
        }
    }
}

impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.location)
    }
}
