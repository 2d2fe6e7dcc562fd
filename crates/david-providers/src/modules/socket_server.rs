//! Socket server module
//!
//! Provides the `dyn SocketServer` registration contract. The transport is
//! not part of the host.

use crate::constants::WEB_SOCKET_SERVER_NAME;
use david_application::ports::registry::{MODULES, ModuleEntry, ModuleRegistrar};
use david_domain::constants::DEFAULT_SOCKET_SERVER_MODULE;
use david_domain::ports::SocketServer;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// WebSocket endpoint of the host
#[derive(Debug)]
pub struct WebSocketServer {
    listening: AtomicBool,
}

impl WebSocketServer {
    /// Create a server that is not listening yet
    pub fn new() -> Self {
        tracing::debug!("WebSocket server created");
        Self {
            listening: AtomicBool::new(false),
        }
    }

    /// Mark the server as accepting connections
    pub fn start(&self) {
        self.listening.store(true, Ordering::Release);
    }

    /// Mark the server as closed
    pub fn stop(&self) {
        self.listening.store(false, Ordering::Release);
    }
}

impl Default for WebSocketServer {
    fn default() -> Self {
        Self::new()
    }
}

impl SocketServer for WebSocketServer {
    fn server_name(&self) -> &str {
        WEB_SOCKET_SERVER_NAME
    }

    fn is_listening(&self) -> bool {
        self.listening.load(Ordering::Acquire)
    }
}

fn register(registrar: &mut ModuleRegistrar) {
    registrar
        .singleton::<WebSocketServer>()
        .provides::<dyn SocketServer, _>(|| Arc::new(WebSocketServer::new()) as Arc<dyn SocketServer>);
}

#[linkme::distributed_slice(MODULES)]
static SOCKET_SERVER_MODULE: ModuleEntry = ModuleEntry {
    name: DEFAULT_SOCKET_SERVER_MODULE,
    description: "WebSocket server endpoint",
    register,
};
