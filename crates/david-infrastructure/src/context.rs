//! Process context
//!
//! [`ProcessContext`] owns the one capability resolver of the process and
//! the capabilities the host needs at startup. [`ProcessContextCell`] builds
//! it lazily on first access and tears it down on shutdown so that a later
//! access initializes a fresh context.

use crate::config::AppConfig;
use crate::constants::CONTEXT_TRACE_ORIGIN;
use crate::persistence::EntityContext;
use crate::resolver::{CapabilityResolver, DirectoryModuleLoader};
use arc_swap::ArcSwapOption;
use david_application::{BoundedMutex, Tracer};
use david_domain::constants::{DEFAULT_LOCK_TIMEOUT_MS, PROCESS_CONTEXT_LOCK_NAME};
use david_domain::error::{Error, Result};
use david_domain::ports::{Database, SocketServer};
use david_domain::value_objects::TraceLevel;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// Capabilities and services shared by the whole process
pub struct ProcessContext {
    config: Arc<AppConfig>,
    tracer: Tracer,
    resolver: Arc<CapabilityResolver>,
    socket_server: Arc<dyn SocketServer>,
    shut_down: AtomicBool,
}

impl ProcessContext {
    /// Build the context
    ///
    /// Creates the resolver, registers the fallback loader for the module
    /// directory and resolves the socket server capability.
    pub fn new(config: Arc<AppConfig>, tracer: Tracer) -> Result<Self> {
        let mut scope = tracer.begin_scope(
            TraceLevel::Info,
            CONTEXT_TRACE_ORIGIN,
            "new",
            None,
            &[config.runtime.socket_server_module.as_str()],
        );

        let resolver = Arc::new(CapabilityResolver::new(tracer.clone(), config.lock.timeout_ms));
        resolver.register_fallback(Arc::new(DirectoryModuleLoader::new(config.module_directory())));

        let socket_server = match resolver.resolve::<dyn SocketServer>(&config.runtime.socket_server_module) {
            Ok(server) => server,
            Err(e) => {
                scope.add_end_info([e.to_string()]);
                resolver.unregister_fallback();
                return Err(e);
            }
        };
        scope.add_end_info([socket_server.server_name()]);
        tracing::info!(
            socket_server = socket_server.server_name(),
            module = %config.runtime.socket_server_module,
            "Process context initialized"
        );

        Ok(Self {
            config,
            tracer,
            resolver,
            socket_server,
            shut_down: AtomicBool::new(false),
        })
    }

    /// Configuration the context was built from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Diagnostic tracer
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// The capability resolver
    pub fn resolver(&self) -> &Arc<CapabilityResolver> {
        &self.resolver
    }

    /// The socket server resolved at startup
    pub fn socket_server(&self) -> Arc<dyn SocketServer> {
        Arc::clone(&self.socket_server)
    }

    /// The database capability, resolved on first use
    pub fn database(&self) -> Result<Arc<dyn Database>> {
        self.resolver
            .resolve::<dyn Database>(&self.config.runtime.database_module)
    }

    /// Persistence bridge bound to this context's resolver
    pub fn entities(&self) -> EntityContext {
        EntityContext::new(
            Arc::clone(&self.resolver),
            self.tracer.clone(),
            self.config.runtime.database_module.clone(),
        )
    }

    /// Whether [`shutdown`](Self::shutdown) already ran
    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::Acquire)
    }

    /// Clear the resolver caches and unregister the fallback loader
    ///
    /// Repeated calls do nothing. A failed clear leaves the context running,
    /// so the call can be retried.
    pub fn shutdown(&self) -> Result<()> {
        if self.is_shut_down() {
            return Ok(());
        }
        let mut scope = self
            .tracer
            .begin_scope(TraceLevel::Info, CONTEXT_TRACE_ORIGIN, "shutdown", None, &[]);
        if let Err(e) = self.resolver.clear() {
            scope.add_end_info([e.to_string()]);
            tracing::warn!(error = %e, "Process context shutdown failed");
            return Err(e);
        }
        self.resolver.unregister_fallback();
        self.shut_down.store(true, Ordering::Release);
        tracing::info!("Process context shut down");
        Ok(())
    }
}

impl fmt::Debug for ProcessContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessContext")
            .field("resolver", &self.resolver)
            .field("tracer", &self.tracer)
            .field("shut_down", &self.is_shut_down())
            .finish_non_exhaustive()
    }
}

/// Lazily initialized slot holding the process context
///
/// Reads are lock-free; initialization and shutdown are serialized by a
/// [`BoundedMutex`] with check-lock-check.
pub struct ProcessContextCell {
    lock: BoundedMutex,
    context: ArcSwapOption<ProcessContext>,
}

impl ProcessContextCell {
    /// Empty cell whose lock uses `lock_timeout_ms`
    pub fn new(lock_timeout_ms: i64) -> Self {
        Self {
            lock: BoundedMutex::with_timeout_ms(PROCESS_CONTEXT_LOCK_NAME, lock_timeout_ms),
            context: ArcSwapOption::empty(),
        }
    }

    /// The context, built with `init` if the cell is empty
    ///
    /// When several threads race, exactly one runs `init`; the others receive
    /// its result. A failed `init` leaves the cell empty.
    pub fn get_or_init<F>(&self, init: F) -> Result<Arc<ProcessContext>>
    where
        F: FnOnce() -> Result<ProcessContext>,
    {
        if let Some(context) = self.context.load_full() {
            return Ok(context);
        }

        let _guard = self.lock.acquire()?;
        if let Some(context) = self.context.load_full() {
            return Ok(context);
        }

        let context = Arc::new(init()?);
        self.context.store(Some(Arc::clone(&context)));
        Ok(context)
    }

    /// The context, if initialized
    pub fn current(&self) -> Result<Arc<ProcessContext>> {
        self.context
            .load_full()
            .ok_or_else(|| Error::uninitialized("ProcessContext"))
    }

    /// Whether the cell holds a context
    pub fn is_initialized(&self) -> bool {
        self.context.load().is_some()
    }

    /// Shut the context down and empty the cell
    ///
    /// Does nothing when the cell is empty. The cell keeps its context
    /// when the context fails to shut down.
    pub fn shutdown(&self) -> Result<()> {
        let _guard = self.lock.acquire()?;
        let Some(context) = self.context.load_full() else {
            return Ok(());
        };
        context.shutdown()?;
        self.context.store(None);
        Ok(())
    }

    /// Bounded wait of the cell lock, `None` when unbounded
    pub fn lock_timeout(&self) -> Option<Duration> {
        self.lock.timeout()
    }
}

impl Default for ProcessContextCell {
    fn default() -> Self {
        Self::new(DEFAULT_LOCK_TIMEOUT_MS)
    }
}

impl fmt::Debug for ProcessContextCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessContextCell")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

static PROCESS_CONTEXT: OnceLock<ProcessContextCell> = OnceLock::new();

/// The process-wide context cell
///
/// Created with the default lock timeout unless
/// [`init_process_context`] ran first.
pub fn process_context() -> &'static ProcessContextCell {
    PROCESS_CONTEXT.get_or_init(ProcessContextCell::default)
}

/// Create the process-wide cell with `lock_timeout_ms`
///
/// Returns the existing cell unchanged when it was already created.
pub fn init_process_context(lock_timeout_ms: i64) -> &'static ProcessContextCell {
    PROCESS_CONTEXT.get_or_init(|| ProcessContextCell::new(lock_timeout_ms))
}
