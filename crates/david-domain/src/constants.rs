//! Domain layer constants
//!
//! Contains constants that are part of the runtime contract and are used by
//! every layer. Infrastructure-specific constants (config file names, env
//! prefixes) remain in `david_infrastructure::constants`.

// ============================================================================
// SYNCHRONIZATION CONSTANTS
// ============================================================================

/// Default bounded mutex timeout in milliseconds
pub const DEFAULT_LOCK_TIMEOUT_MS: i64 = 10_002;

/// Name of the mutex guarding the process context
pub const PROCESS_CONTEXT_LOCK_NAME: &str = "ProcessContextFactory";

/// Name of the mutex guarding the capability resolver caches
pub const RESOLVER_LOCK_NAME: &str = "CapabilityResolver";

/// Name of the mutex guarding trace file creation
pub const TRACE_WRITER_LOCK_NAME: &str = "TraceWriter";

// ============================================================================
// TRACE CONSTANTS
// ============================================================================

/// Directory (relative to the base directory) holding trace files
pub const TRACE_DIRECTORY: &str = "Trace";

/// Trace file extension
pub const TRACE_FILE_EXTENSION: &str = "csv";

/// Field separator of trace rows
pub const TRACE_FIELD_SEPARATOR: char = ';';

/// Header row written once at the top of every trace file
pub const TRACE_HEADER: [&str; 6] = ["DateTime", "Level", "State", "Type", "Methode", "Keyword"];

/// Timestamp format of trace rows
pub const TRACE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Minimum free disk space (KB) required before a trace file is created (~25 GB)
pub const DEFAULT_MIN_FREE_SPACE_KB: u64 = 25_000_000;

// ============================================================================
// MODULE CONSTANTS
// ============================================================================

/// Module names with this prefix belong to the host runtime and are never
/// searched for by the fallback loader
pub const RESERVED_MODULE_PREFIX: &str = "system.";

/// Symbol exported by dynamically loaded modules
pub const MODULE_REGISTER_SYMBOL: &str = "david_module_register";

/// Module providing the socket server capability
pub const DEFAULT_SOCKET_SERVER_MODULE: &str = "david-socket-server";

/// Module providing the database capability
pub const DEFAULT_DATABASE_MODULE: &str = "david-file-database";

/// Directory (relative to the base directory) searched by the fallback loader
pub const DEFAULT_MODULE_DIRECTORY: &str = "modules";
