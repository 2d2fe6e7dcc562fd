//! # Application Layer
//!
//! Building blocks shared by the infrastructure and the provider crates:
//!
//! - [`sync`] - non-reentrant mutex with a timeout
//! - [`diagnostics`] - scoped begin/end tracing on top of a trace sink
//! - [`ports`] - module registry, trace provider registry and module loader port
//!
//! Modules declare their capabilities through registration functions listed
//! in the [`MODULES`](ports::registry::MODULES) distributed slice. Dynamic
//! libraries export the same registration function with [`export_module!`].

pub mod diagnostics;
pub mod ports;
pub mod sync;

pub use diagnostics::{TraceScope, Tracer};
pub use sync::{BoundedMutex, BoundedMutexGuard};

/// Export a module registration function from a dynamic library
///
/// The host's fallback loader looks up the exported symbol after loading
/// `<name>.<dll extension>` from the module directory.
///
/// ```ignore
/// fn register(registrar: &mut ModuleRegistrar) {
///     registrar
///         .singleton::<Clock>()
///         .provides::<dyn TimeSource, _>(|| Arc::new(Clock) as Arc<dyn TimeSource>);
/// }
///
/// david_application::export_module!(register);
/// ```
#[macro_export]
macro_rules! export_module {
    ($register:path) => {
        #[unsafe(no_mangle)]
        pub fn david_module_register(
            registrar: &mut $crate::ports::registry::ModuleRegistrar,
        ) {
            $register(registrar)
        }
    };
}
