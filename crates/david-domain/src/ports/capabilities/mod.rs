//! Capability Contracts
//!
//! Traits the host resolves from loadable modules. Implementations live in
//! modules registered with the capability resolver, never in the host.

/// Persistence contracts
pub mod database;
/// Socket server contract
pub mod socket;

pub use database::{Database, Entity};
pub use socket::SocketServer;
