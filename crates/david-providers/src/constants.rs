//! Provider-specific constants

/// Characters forcing a trace field to be quoted
pub const TRACE_QUOTED_CHARS: [char; 4] = [';', '"', '\r', '\n'];

/// Attempts to find an unused trace file name before giving up
pub const TRACE_FILE_CREATE_ATTEMPTS: u32 = 8;

/// Server name reported by the built-in socket server
pub const WEB_SOCKET_SERVER_NAME: &str = "WebSocketServer";

/// Provider name reported by the built-in file database
pub const FILE_DATABASE_PROVIDER_NAME: &str = "FileBasedDatabase";

/// Identifier of the built-in person entity
pub const PERSON_IDENTIFIER: &str = "DAVID.App.Base.Person";
