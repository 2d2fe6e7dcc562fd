//! Socket Server Capability
//!
//! Only the registration contract is defined here; the transport belongs to
//! whichever module provides the capability.

/// Network endpoint the host exposes to clients
pub trait SocketServer: Send + Sync {
    /// Human-readable server name
    fn server_name(&self) -> &str;

    /// Whether the server accepts connections
    fn is_listening(&self) -> bool;
}
