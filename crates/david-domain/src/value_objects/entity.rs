//! Entity values exchanged with the persistence collaborator

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Initial property values applied to a freshly created entity
pub type KeyValues = HashMap<String, serde_json::Value>;

/// Handle returned when an entity is attached to a database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityEntry {
    /// Identity assigned by the database
    pub identity: u64,
    /// Symbolic identifier of the entity type
    pub identifier: String,
    /// When the entity was attached
    pub creation_date: DateTime<Local>,
}
