//! Persistence Capabilities
//!
//! The persistence collaborator builds entities by symbolic identifier
//! through the capability resolver and attaches them to a [`Database`].

use crate::error::Result;
use crate::value_objects::{EntityEntry, KeyValues};
use std::any::Any;
use std::fmt;

/// Entity type created by identifier rather than by contract
pub trait Entity: Any + Send + Sync + fmt::Debug {
    /// Symbolic identifier of the entity type
    fn identifier(&self) -> &str;

    /// Apply initial property values
    fn apply_key_values(&mut self, values: &KeyValues) -> Result<()>;

    /// JSON representation stored by databases
    fn to_json(&self) -> Result<serde_json::Value>;

    /// Access to the concrete type
    fn as_any(&self) -> &dyn Any;
}

/// Database backend entities are attached to
pub trait Database: Send + Sync {
    /// Name of the backend
    fn provider_name(&self) -> &str;

    /// Start tracking an entity
    fn attach(&self, entity: Box<dyn Entity>) -> Result<EntityEntry>;

    /// Number of tracked entities
    fn attached_count(&self) -> usize;
}
