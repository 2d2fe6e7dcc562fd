//! Application base module
//!
//! Declares the entities created by identifier through the persistence
//! bridge.

use crate::constants::PERSON_IDENTIFIER;
use chrono::NaiveDate;
use david_application::ports::registry::{MODULES, ModuleEntry, ModuleRegistrar};
use david_domain::error::{Error, Result};
use david_domain::ports::Entity;
use david_domain::value_objects::KeyValues;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;

/// Name of the module
pub const APP_BASE_MODULE: &str = "david-app-base";

/// A person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Given name
    pub name: String,
    /// Family name
    pub surname: String,
    /// Date of birth
    pub birthdate: Option<NaiveDate>,
}

impl Entity for Person {
    fn identifier(&self) -> &str {
        PERSON_IDENTIFIER
    }

    fn apply_key_values(&mut self, values: &KeyValues) -> Result<()> {
        let mut current = serde_json::to_value(&*self)?;
        if let Value::Object(properties) = &mut current {
            for (key, value) in values {
                if !properties.contains_key(key) {
                    return Err(Error::invalid_argument(format!(
                        "Unknown property '{key}' on {PERSON_IDENTIFIER}"
                    )));
                }
                properties.insert(key.clone(), value.clone());
            }
        }
        *self = serde_json::from_value(current)?;
        Ok(())
    }

    fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn register(registrar: &mut ModuleRegistrar) {
    registrar
        .declare::<Person>()
        .identifier(PERSON_IDENTIFIER)
        .default_constructor::<Person>();
}

#[linkme::distributed_slice(MODULES)]
static APP_BASE_MODULE_ENTRY: ModuleEntry = ModuleEntry {
    name: APP_BASE_MODULE,
    description: "Base application entities",
    register,
};
