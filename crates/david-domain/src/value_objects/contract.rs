//! Capability contract identifiers

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of a capability contract
///
/// A contract is any `'static` type, usually a trait object such as
/// `dyn SocketServer`. Equality and hashing use the [`TypeId`] only; the type
/// name is carried for diagnostics and error messages.
///
/// # Example
///
/// ```
/// use david_domain::value_objects::ContractId;
///
/// trait Clock: Send + Sync {}
///
/// let id = ContractId::of::<dyn Clock>();
/// assert_eq!(id.short_name(), "Clock");
/// assert_eq!(id, ContractId::of::<dyn Clock>());
/// ```
#[derive(Clone, Copy)]
pub struct ContractId {
    type_id: TypeId,
    name: &'static str,
}

impl ContractId {
    /// Contract identifier of `C`
    pub fn of<C: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: std::any::type_name::<C>(),
        }
    }

    /// Underlying type id
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without `dyn` and module path
    pub fn short_name(&self) -> &'static str {
        let name = self.name.strip_prefix("dyn ").unwrap_or(self.name);
        let head = name.split('<').next().unwrap_or(name);
        let start = head.rfind("::").map_or(0, |index| index + 2);
        &name[start..]
    }
}

impl PartialEq for ContractId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ContractId {}

impl Hash for ContractId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContractId").field(&self.name).finish()
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
