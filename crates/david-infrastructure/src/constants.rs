//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "david.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "david";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "DAVID";

/// Separator between the prefix and nested keys of environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "DAVID_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File stem of rolling log files when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "david";

// ============================================================================
// DIAGNOSTIC TRACE CONSTANTS
// ============================================================================

/// Origin of trace events written by the capability resolver
pub const RESOLVER_TRACE_ORIGIN: &str = "CapabilityResolver";

/// Origin of trace events written by the process context
pub const CONTEXT_TRACE_ORIGIN: &str = "ProcessContext";

/// Origin of trace events written by the persistence bridge
pub const ENTITY_CONTEXT_TRACE_ORIGIN: &str = "EntityContext";

/// Origin of the startup state event
pub const PROGRAM_TRACE_ORIGIN: &str = "PROGRAM";

/// Operation of the startup state event
pub const PROGRAM_INIT_OPERATION: &str = "INICIALIZE";
