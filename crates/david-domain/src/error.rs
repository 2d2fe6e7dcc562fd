//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the DAVID host runtime
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// A thread tried to acquire a bounded mutex it already holds
    #[error("Lock recursion on '{name}'")]
    LockRecursion {
        /// Name of the mutex
        name: String,
    },

    /// Waiting for a bounded mutex exceeded its timeout
    #[error("Lock timeout on '{name}' elapsed ({timeout_ms} ms)")]
    LockTimeout {
        /// Name of the mutex
        name: String,
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },

    /// A named module is missing or failed to load
    #[error("Module '{module}' cannot be loaded: {message}")]
    ModuleLoad {
        /// Logical module name
        module: String,
        /// Description of the failure
        message: String,
        /// Underlying load failure
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A loaded module declares nothing that satisfies the request
    #[error("Capability '{contract}' was not found in module '{module}'")]
    CapabilityNotFound {
        /// Contract type name or entity identifier
        contract: String,
        /// Logical module name
        module: String,
    },

    /// A process-wide component was used before startup initialized it
    #[error("{component} is not initialized yet")]
    Uninitialized {
        /// Name of the component
        component: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

// Synchronization error creation methods
impl Error {
    /// Create a lock recursion error
    pub fn lock_recursion<S: Into<String>>(name: S) -> Self {
        Self::LockRecursion { name: name.into() }
    }

    /// Create a lock timeout error
    pub fn lock_timeout<S: Into<String>>(name: S, timeout_ms: u64) -> Self {
        Self::LockTimeout {
            name: name.into(),
            timeout_ms,
        }
    }
}

// Capability resolution error creation methods
impl Error {
    /// Create a module load error without an underlying cause
    pub fn module_load<M: Into<String>, S: Into<String>>(module: M, message: S) -> Self {
        Self::ModuleLoad {
            module: module.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a module load error wrapping the underlying failure
    pub fn module_load_with_source<
        M: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        module: M,
        message: S,
        source: E,
    ) -> Self {
        Self::ModuleLoad {
            module: module.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a capability not found error
    pub fn capability_not_found<C: Into<String>, M: Into<String>>(contract: C, module: M) -> Self {
        Self::CapabilityNotFound {
            contract: contract.into(),
            module: module.into(),
        }
    }

    /// Create an uninitialized component error
    pub fn uninitialized<S: Into<String>>(component: S) -> Self {
        Self::Uninitialized {
            component: component.into(),
        }
    }
}

// Classification helpers
impl Error {
    /// Whether the error comes from a bounded mutex (recursion or timeout)
    pub fn is_lock_error(&self) -> bool {
        matches!(self, Self::LockRecursion { .. } | Self::LockTimeout { .. })
    }

    /// Whether the error means a module or capability could not be resolved
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::ModuleLoad { .. } | Self::CapabilityNotFound { .. }
        )
    }
}
