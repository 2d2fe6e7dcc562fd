//! Built-in Modules
//!
//! Modules linked into the host. Each registers a [`ModuleEntry`] in the
//! `MODULES` table and is resolved by name like any dynamic module.
//!
//! | Module | Declares |
//! |--------|----------|
//! | `david-socket-server` | [`WebSocketServer`] singleton providing `dyn SocketServer` |
//! | `david-file-database` | [`FileBasedDatabase`] singleton providing `dyn Database` |
//! | `david-app-base` | [`Person`] entity, identifier `DAVID.App.Base.Person` |
//!
//! [`ModuleEntry`]: david_application::ports::registry::ModuleEntry

pub mod app_base;
pub mod file_database;
pub mod socket_server;

pub use app_base::Person;
pub use file_database::FileBasedDatabase;
pub use socket_server::WebSocketServer;
