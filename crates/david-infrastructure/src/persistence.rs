//! Persistence bridge
//!
//! Creates entities by symbolic identifier through the capability resolver
//! and attaches them to the database capability.

use crate::constants::ENTITY_CONTEXT_TRACE_ORIGIN;
use crate::resolver::CapabilityResolver;
use david_application::Tracer;
use david_domain::error::Result;
use david_domain::ports::Database;
use david_domain::value_objects::{EntityEntry, KeyValues, TraceLevel};
use std::sync::Arc;

/// Adds entities to the database module's store
#[derive(Debug, Clone)]
pub struct EntityContext {
    resolver: Arc<CapabilityResolver>,
    tracer: Tracer,
    database_module: String,
}

impl EntityContext {
    /// Bridge attaching to the database resolved from `database_module`
    pub fn new(resolver: Arc<CapabilityResolver>, tracer: Tracer, database_module: String) -> Self {
        Self {
            resolver,
            tracer,
            database_module,
        }
    }

    /// Create the entity `identifier` declared in `module`, apply
    /// `key_values` and attach it to the database
    pub fn add_by_full_name(
        &self,
        module: &str,
        identifier: &str,
        key_values: Option<&KeyValues>,
    ) -> Result<EntityEntry> {
        let key_count = key_values.map_or(0, |values| values.len()).to_string();
        let mut scope = self.tracer.begin_scope(
            TraceLevel::Info,
            ENTITY_CONTEXT_TRACE_ORIGIN,
            "add_by_full_name",
            None,
            &[module, identifier, key_count.as_str()],
        );

        let result = self.attach(module, identifier, key_values);
        match &result {
            Ok(entry) => scope.add_end_info([format!("identity {}", entry.identity)]),
            Err(e) => scope.add_end_info([e.to_string()]),
        }
        result
    }

    fn attach(
        &self,
        module: &str,
        identifier: &str,
        key_values: Option<&KeyValues>,
    ) -> Result<EntityEntry> {
        let entity = self.resolver.create_entity(module, identifier, key_values)?;
        let database = self
            .resolver
            .resolve::<dyn Database>(&self.database_module)?;
        database.attach(entity)
    }
}
