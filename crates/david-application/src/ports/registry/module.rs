//! Module Registry
//!
//! A module describes its types through a registration function instead of
//! runtime metadata. Each declared type may be marked as a singleton
//! candidate, list the contracts it implements, bind zero-argument factories
//! to contracts, and carry a string identifier with a zero-argument
//! constructor for identifier-based entity creation.

use david_domain::ports::Entity;
use david_domain::value_objects::{ContractId, ModuleDescriptor};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type-erased factory producing an `Arc<C>` boxed as `Any`
pub type CapabilityFactory = Arc<dyn Fn() -> Box<dyn Any + Send + Sync> + Send + Sync>;

/// Zero-argument constructor of an entity
pub type EntityConstructor = Arc<dyn Fn() -> Box<dyn Entity> + Send + Sync>;

/// Contract → factory pair declared on a type
#[derive(Clone)]
pub struct FactoryBinding {
    contract: ContractId,
    factory: CapabilityFactory,
}

impl FactoryBinding {
    /// Contract the factory produces
    pub fn contract(&self) -> ContractId {
        self.contract
    }

    /// Run the factory
    ///
    /// The produced value is an `Arc<C>` for the bound contract `C`.
    pub fn invoke(&self) -> Box<dyn Any + Send + Sync> {
        (self.factory)()
    }
}

impl fmt::Debug for FactoryBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryBinding")
            .field("contract", &self.contract)
            .finish_non_exhaustive()
    }
}

/// A type declared by a module
pub struct TypeDeclaration {
    type_name: &'static str,
    singleton: bool,
    identifier: Option<String>,
    implements: Vec<ContractId>,
    bindings: Vec<FactoryBinding>,
    constructor: Option<EntityConstructor>,
}

impl TypeDeclaration {
    fn new(type_name: &'static str, singleton: bool) -> Self {
        Self {
            type_name,
            singleton,
            identifier: None,
            implements: Vec::new(),
            bindings: Vec::new(),
            constructor: None,
        }
    }

    /// Rust type name of the declared type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the type is a process-singleton candidate
    pub fn is_singleton(&self) -> bool {
        self.singleton
    }

    /// Symbolic identifier for identifier-based creation
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Contracts the type declares to implement
    pub fn contracts(&self) -> &[ContractId] {
        &self.implements
    }

    /// Whether the type declares to implement `contract`
    pub fn implements(&self, contract: &ContractId) -> bool {
        self.implements.contains(contract)
    }

    /// Factory bindings in declaration order
    pub fn bindings(&self) -> &[FactoryBinding] {
        &self.bindings
    }

    /// First factory binding targeting `contract`
    pub fn binding_for(&self, contract: &ContractId) -> Option<&FactoryBinding> {
        self.bindings
            .iter()
            .find(|binding| binding.contract == *contract)
    }

    /// Build a fresh entity with the zero-argument constructor
    pub fn construct(&self) -> Option<Box<dyn Entity>> {
        self.constructor.as_ref().map(|constructor| constructor())
    }
}

impl fmt::Debug for TypeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDeclaration")
            .field("type_name", &self.type_name)
            .field("singleton", &self.singleton)
            .field("identifier", &self.identifier)
            .field("implements", &self.implements)
            .field("bindings", &self.bindings)
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}

/// Fluent builder for one [`TypeDeclaration`]
pub struct TypeDeclarationBuilder<'r> {
    declaration: &'r mut TypeDeclaration,
}

impl TypeDeclarationBuilder<'_> {
    /// Declare that the type implements `C`
    pub fn implements<C: ?Sized + 'static>(self) -> Self {
        let contract = ContractId::of::<C>();
        if !self.declaration.implements.contains(&contract) {
            self.declaration.implements.push(contract);
        }
        self
    }

    /// Bind a zero-argument factory to `C`
    ///
    /// The same callable may be bound to several contracts.
    pub fn factory<C, F>(self, factory: F) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<C> + Send + Sync + 'static,
    {
        self.declaration.bindings.push(FactoryBinding {
            contract: ContractId::of::<C>(),
            factory: Arc::new(move || Box::new(factory()) as Box<dyn Any + Send + Sync>),
        });
        self
    }

    /// Declare `C` as implemented and bind its factory
    pub fn provides<C, F>(self, factory: F) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<C> + Send + Sync + 'static,
    {
        self.implements::<C>().factory::<C, F>(factory)
    }

    /// Symbolic identifier used by identifier-based creation
    pub fn identifier<S: Into<String>>(self, identifier: S) -> Self {
        self.declaration.identifier = Some(identifier.into());
        self
    }

    /// Zero-argument constructor used by identifier-based creation
    pub fn constructor<E, F>(self, constructor: F) -> Self
    where
        E: Entity,
        F: Fn() -> E + Send + Sync + 'static,
    {
        self.declaration.constructor = Some(Arc::new(move || Box::new(constructor()) as Box<dyn Entity>));
        self
    }

    /// Use `E::default` as the zero-argument constructor
    pub fn default_constructor<E: Entity + Default>(self) -> Self {
        self.constructor(E::default)
    }
}

/// Collects the type declarations of one module
#[derive(Debug)]
pub struct ModuleRegistrar {
    descriptor: ModuleDescriptor,
    declarations: Vec<TypeDeclaration>,
}

impl ModuleRegistrar {
    /// Registrar for the module described by `descriptor`
    pub fn new(descriptor: ModuleDescriptor) -> Self {
        Self {
            descriptor,
            declarations: Vec::new(),
        }
    }

    /// Module being registered
    pub fn descriptor(&self) -> &ModuleDescriptor {
        &self.descriptor
    }

    /// Declare `T` as a process-singleton candidate
    pub fn singleton<T: ?Sized + 'static>(&mut self) -> TypeDeclarationBuilder<'_> {
        self.push(TypeDeclaration::new(std::any::type_name::<T>(), true))
    }

    /// Declare `T` without the singleton marker
    pub fn declare<T: ?Sized + 'static>(&mut self) -> TypeDeclarationBuilder<'_> {
        self.push(TypeDeclaration::new(std::any::type_name::<T>(), false))
    }

    /// Finish registration
    pub fn finish(self) -> ModuleDefinition {
        ModuleDefinition {
            descriptor: self.descriptor,
            declarations: self.declarations,
        }
    }

    fn push(&mut self, declaration: TypeDeclaration) -> TypeDeclarationBuilder<'_> {
        self.declarations.push(declaration);
        let index = self.declarations.len() - 1;
        TypeDeclarationBuilder {
            declaration: &mut self.declarations[index],
        }
    }
}

/// A loaded module: its descriptor and declared types
#[derive(Debug)]
pub struct ModuleDefinition {
    descriptor: ModuleDescriptor,
    declarations: Vec<TypeDeclaration>,
}

impl ModuleDefinition {
    /// Where the module came from
    pub fn descriptor(&self) -> &ModuleDescriptor {
        &self.descriptor
    }

    /// Logical module name
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// All declared types in declaration order
    pub fn declarations(&self) -> &[TypeDeclaration] {
        &self.declarations
    }

    /// Singleton candidates in declaration order
    pub fn singletons(&self) -> impl Iterator<Item = &TypeDeclaration> {
        self.declarations.iter().filter(|d| d.is_singleton())
    }

    /// Number of singleton candidates binding a factory to `contract`
    pub fn binding_count(&self, contract: &ContractId) -> usize {
        self.singletons()
            .filter(|d| d.implements(contract) && d.binding_for(contract).is_some())
            .count()
    }

    /// First declared type carrying `identifier`
    pub fn find_identifier(&self, identifier: &str) -> Option<&TypeDeclaration> {
        self.declarations
            .iter()
            .find(|d| d.identifier() == Some(identifier))
    }
}

/// Registry entry for built-in modules
///
/// Each module registers itself with this entry using
/// `#[linkme::distributed_slice(MODULES)]`.
pub struct ModuleEntry {
    /// Unique module name (e.g., "david-socket-server")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Registration function declaring the module's types
    pub register: fn(&mut ModuleRegistrar),
}

impl ModuleEntry {
    /// Run the registration function
    pub fn build(&self) -> ModuleDefinition {
        let mut registrar = ModuleRegistrar::new(ModuleDescriptor::builtin(self.name));
        (self.register)(&mut registrar);
        registrar.finish()
    }
}

// Auto-collection via linkme distributed slices - modules submit entries at compile time
#[linkme::distributed_slice]
pub static MODULES: [ModuleEntry] = [..];

/// Find a built-in module by name
pub fn find_module(name: &str) -> Option<&'static ModuleEntry> {
    MODULES.iter().find(|entry| entry.name == name)
}

/// List all built-in modules
///
/// Returns (name, description) tuples. Useful for diagnostics and CLI help.
pub fn list_modules() -> Vec<(&'static str, &'static str)> {
    MODULES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
