//! Registration System
//!
//! Uses the `linkme` crate for compile-time registration of modules and
//! trace providers that are discovered by name at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Module Registration Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Module defines:    #[linkme::distributed_slice(MODULES)]    │
//! │                        static ENTRY: ModuleEntry = ...          │
//! │                              ↓                                  │
//! │  2. Resolver loads:    find_module("david-socket-server")       │
//! │                        → register(&mut ModuleRegistrar)         │
//! │                              ↓                                  │
//! │  3. Resolver scans:    singleton declarations + bindings        │
//! │                              ↓                                  │
//! │  4. Factory invoked:   Arc<dyn SocketServer> cached by contract │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a Module
//!
//! ```ignore
//! use david_application::ports::registry::{ModuleEntry, ModuleRegistrar, MODULES};
//!
//! fn register(registrar: &mut ModuleRegistrar) {
//!     registrar
//!         .singleton::<WebSocketServer>()
//!         .provides::<dyn SocketServer, _>(|| Arc::new(WebSocketServer::new()) as Arc<dyn SocketServer>);
//! }
//!
//! #[linkme::distributed_slice(MODULES)]
//! static SOCKET_SERVER_MODULE: ModuleEntry = ModuleEntry {
//!     name: "david-socket-server",
//!     description: "WebSocket server endpoint",
//!     register,
//! };
//! ```

pub mod module;
pub mod trace;

// Re-export all registry types and functions
pub use module::{
    CapabilityFactory, EntityConstructor, FactoryBinding, MODULES, ModuleDefinition, ModuleEntry,
    ModuleRegistrar, TypeDeclaration, TypeDeclarationBuilder, find_module, list_modules,
};
pub use trace::{
    TRACE_PROVIDERS, TraceProviderConfig, TraceProviderEntry, list_trace_providers,
    resolve_trace_provider,
};
