//! Capability resolver
//!
//! Hands out exactly one instance per capability contract for the lifetime
//! of the resolver. Instances come from factory bindings declared by the
//! singleton types of a named module:
//!
//! 1. the module is loaded once, from the built-in table or the fallback loader,
//!    even when the contract is already cached;
//! 2. singleton declarations not implementing the contract are skipped;
//! 3. the first declaration with a binding for the contract whose factory
//!    produces the contract type wins;
//! 4. the instance is cached by contract and shared with every later caller.
//!
//! Reads of the caches are lock-free snapshots. Loading and creation run
//! under a [`BoundedMutex`] with check-lock-check, so concurrent first
//! requests create a single instance.

use super::loader::BuiltinModuleLoader;
use crate::constants::RESOLVER_TRACE_ORIGIN;
use crate::utils::TimedOperation;
use arc_swap::ArcSwap;
use david_application::ports::ModuleLoader;
use david_application::ports::registry::ModuleDefinition;
use david_application::{BoundedMutex, TraceScope, Tracer};
use david_domain::constants::RESOLVER_LOCK_NAME;
use david_domain::error::{Error, Result};
use david_domain::ports::Entity;
use david_domain::value_objects::{ContractId, KeyValues, TraceLevel};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

type ModuleMap = HashMap<String, Arc<ModuleDefinition>>;
type InstanceMap = HashMap<ContractId, Arc<dyn Any + Send + Sync>>;

/// Where a resolved instance came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Cached,
    Created,
}

impl Resolution {
    fn as_str(self) -> &'static str {
        match self {
            Self::Cached => "cached",
            Self::Created => "created",
        }
    }
}

/// Process-lifetime capability resolver
pub struct CapabilityResolver {
    lock: BoundedMutex,
    modules: ArcSwap<ModuleMap>,
    instances: ArcSwap<InstanceMap>,
    builtin: BuiltinModuleLoader,
    fallback: RwLock<Option<Arc<dyn ModuleLoader>>>,
    tracer: Tracer,
}

impl CapabilityResolver {
    /// Resolver writing trace scopes to `tracer`
    pub fn new(tracer: Tracer, lock_timeout_ms: i64) -> Self {
        Self {
            lock: BoundedMutex::with_timeout_ms(RESOLVER_LOCK_NAME, lock_timeout_ms),
            modules: ArcSwap::from_pointee(ModuleMap::new()),
            instances: ArcSwap::from_pointee(InstanceMap::new()),
            builtin: BuiltinModuleLoader::new(),
            fallback: RwLock::new(None),
            tracer,
        }
    }

    /// Resolve the process instance of contract `C` from `module`
    ///
    /// # Example
    ///
    /// ```ignore
    /// let server = resolver.resolve::<dyn SocketServer>("david-socket-server")?;
    /// ```
    pub fn resolve<C>(&self, module: &str) -> Result<Arc<C>>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let contract = ContractId::of::<C>();
        let mut scope = self.tracer.begin_scope(
            TraceLevel::Debug,
            RESOLVER_TRACE_ORIGIN,
            "resolve",
            None,
            &[contract.name(), module],
        );
        let timer = TimedOperation::start();

        let result = self.resolve_contract::<C>(&contract, module);
        match &result {
            Ok((_, resolution)) => {
                scope.add_end_info([resolution.as_str().to_string(), timer.end_info()]);
            }
            Err(e) => record_failure(&mut scope, e),
        }
        result.map(|(instance, _)| instance)
    }

    /// Create a fresh entity declared with `identifier` in `module`
    ///
    /// Entities are never cached. `key_values` are applied to the new instance.
    pub fn create_entity(
        &self,
        module: &str,
        identifier: &str,
        key_values: Option<&KeyValues>,
    ) -> Result<Box<dyn Entity>> {
        let mut scope = self.tracer.begin_scope(
            TraceLevel::Debug,
            RESOLVER_TRACE_ORIGIN,
            "create_entity",
            None,
            &[module, identifier],
        );

        let result = self.construct_entity(module, identifier, key_values);
        if let Err(e) = &result {
            record_failure(&mut scope, e);
        }
        result
    }

    /// Install the loader consulted when a module is not built in
    ///
    /// Replaces any previously registered fallback.
    pub fn register_fallback(&self, loader: Arc<dyn ModuleLoader>) {
        tracing::debug!(loader = loader.loader_name(), "Fallback module loader registered");
        *self.fallback.write().unwrap_or_else(PoisonError::into_inner) = Some(loader);
    }

    /// Remove the fallback loader
    pub fn unregister_fallback(&self) -> Option<Arc<dyn ModuleLoader>> {
        self.fallback
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Whether a fallback loader is registered
    pub fn has_fallback(&self) -> bool {
        self.fallback
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Whether `module` has been loaded
    pub fn is_loaded(&self, module: &str) -> bool {
        self.modules.load().contains_key(module)
    }

    /// Names of the loaded modules, sorted
    pub fn loaded_modules(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.load().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of cached capability instances
    pub fn cached_count(&self) -> usize {
        self.instances.load().len()
    }

    /// Drop every cached instance and forget every loaded module
    pub fn clear(&self) -> Result<()> {
        let _guard = self.lock.acquire()?;
        self.instances.store(Arc::new(InstanceMap::new()));
        self.modules.store(Arc::new(ModuleMap::new()));
        tracing::debug!("Capability resolver cleared");
        Ok(())
    }

    fn resolve_contract<C>(&self, contract: &ContractId, module: &str) -> Result<(Arc<C>, Resolution)>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        // A cached instance is only handed out once `module` itself is loaded
        if self.is_loaded(module)
            && let Some(instance) = self.cached::<C>(contract)
        {
            return Ok((instance, Resolution::Cached));
        }

        let _guard = self.lock.acquire()?;
        let definition = self.load_module_locked(module)?;
        if let Some(instance) = self.cached::<C>(contract) {
            return Ok((instance, Resolution::Cached));
        }

        let instance = create_instance::<C>(&definition, contract)?;

        let mut instances = InstanceMap::clone(&self.instances.load());
        instances.insert(*contract, Arc::new(Arc::clone(&instance)));
        self.instances.store(Arc::new(instances));

        tracing::debug!(contract = %contract, module, "Capability instance created");
        Ok((instance, Resolution::Created))
    }

    fn construct_entity(
        &self,
        module: &str,
        identifier: &str,
        key_values: Option<&KeyValues>,
    ) -> Result<Box<dyn Entity>> {
        let loaded = self.modules.load().get(module).cloned();
        let definition = match loaded {
            Some(definition) => definition,
            None => {
                let _guard = self.lock.acquire()?;
                self.load_module_locked(module)?
            }
        };

        let mut entity = definition
            .find_identifier(identifier)
            .and_then(|declaration| declaration.construct())
            .ok_or_else(|| Error::capability_not_found(identifier, module))?;
        if let Some(values) = key_values {
            entity.apply_key_values(values)?;
        }
        Ok(entity)
    }

    fn cached<C>(&self, contract: &ContractId) -> Option<Arc<C>>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        self.instances
            .load()
            .get(contract)
            .and_then(|instance| instance.downcast_ref::<Arc<C>>())
            .cloned()
    }

    /// Load `module` unless already loaded. Caller holds the resolver lock.
    fn load_module_locked(&self, module: &str) -> Result<Arc<ModuleDefinition>> {
        if let Some(definition) = self.modules.load().get(module) {
            return Ok(Arc::clone(definition));
        }

        let definition = match self.builtin.load(module)? {
            Some(definition) => definition,
            None => self
                .load_with_fallback(module)?
                .ok_or_else(|| Error::module_load(module, "module not found"))?,
        };
        let definition = Arc::new(definition);

        let mut modules = ModuleMap::clone(&self.modules.load());
        modules.insert(module.to_string(), Arc::clone(&definition));
        self.modules.store(Arc::new(modules));

        tracing::info!(
            module,
            location = %definition.descriptor().location,
            declarations = definition.declarations().len(),
            "Module loaded"
        );
        Ok(definition)
    }

    fn load_with_fallback(&self, module: &str) -> Result<Option<ModuleDefinition>> {
        let fallback = self
            .fallback
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match fallback {
            Some(loader) => loader.load(module),
            None => Ok(None),
        }
    }
}

impl fmt::Debug for CapabilityResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityResolver")
            .field("loaded_modules", &self.loaded_modules())
            .field("cached", &self.cached_count())
            .field("fallback", &self.has_fallback())
            .finish_non_exhaustive()
    }
}

/// Scan the singleton declarations of `definition` for a producer of `C`
fn create_instance<C>(definition: &ModuleDefinition, contract: &ContractId) -> Result<Arc<C>>
where
    C: ?Sized + Send + Sync + 'static,
{
    if definition.binding_count(contract) > 1 {
        tracing::warn!(
            contract = %contract,
            module = definition.name(),
            "Several singleton types bind this contract, using the first declared"
        );
    }

    for declaration in definition.singletons().filter(|d| d.implements(contract)) {
        let Some(binding) = declaration.binding_for(contract) else {
            tracing::debug!(
                contract = %contract,
                declaration = declaration.type_name(),
                "Declared without a factory binding, skipped"
            );
            continue;
        };
        match binding.invoke().downcast::<Arc<C>>() {
            Ok(instance) => return Ok(*instance),
            Err(_) => {
                tracing::warn!(
                    contract = %contract,
                    declaration = declaration.type_name(),
                    "Factory produced a different type, skipped"
                );
            }
        }
    }

    Err(Error::capability_not_found(contract.name(), definition.name()))
}

fn record_failure(scope: &mut TraceScope, error: &Error) {
    scope.add_end_info([error.to_string()]);
}
