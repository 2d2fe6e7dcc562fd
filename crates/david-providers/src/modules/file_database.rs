//! File database module
//!
//! Provides `dyn Database`. Attached entities are tracked in memory and
//! receive monotonically increasing identities starting at 1.

use crate::constants::FILE_DATABASE_PROVIDER_NAME;
use chrono::Local;
use dashmap::DashMap;
use david_application::ports::registry::{MODULES, ModuleEntry, ModuleRegistrar};
use david_domain::constants::DEFAULT_DATABASE_MODULE;
use david_domain::error::Result;
use david_domain::ports::{Database, Entity};
use david_domain::value_objects::EntityEntry;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Entity tracked by the database
#[derive(Debug)]
struct TrackedEntity {
    entry: EntityEntry,
    snapshot: Value,
}

/// Database tracking attached entities
#[derive(Debug, Default)]
pub struct FileBasedDatabase {
    entities: DashMap<u64, TrackedEntity>,
    last_identity: AtomicU64,
}

impl FileBasedDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry of the entity with `identity`
    pub fn entry(&self, identity: u64) -> Option<EntityEntry> {
        self.entities.get(&identity).map(|tracked| tracked.entry.clone())
    }

    /// JSON snapshot taken when the entity with `identity` was attached
    pub fn snapshot(&self, identity: u64) -> Option<Value> {
        self.entities
            .get(&identity)
            .map(|tracked| tracked.snapshot.clone())
    }
}

impl Database for FileBasedDatabase {
    fn provider_name(&self) -> &str {
        FILE_DATABASE_PROVIDER_NAME
    }

    fn attach(&self, entity: Box<dyn Entity>) -> Result<EntityEntry> {
        let snapshot = entity.to_json()?;
        let identity = self.last_identity.fetch_add(1, Ordering::AcqRel) + 1;
        let entry = EntityEntry {
            identity,
            identifier: entity.identifier().to_string(),
            creation_date: Local::now(),
        };
        self.entities.insert(
            identity,
            TrackedEntity {
                entry: entry.clone(),
                snapshot,
            },
        );
        tracing::debug!(identity, identifier = %entry.identifier, "Entity attached");
        Ok(entry)
    }

    fn attached_count(&self) -> usize {
        self.entities.len()
    }
}

fn register(registrar: &mut ModuleRegistrar) {
    registrar
        .singleton::<FileBasedDatabase>()
        .provides::<dyn Database, _>(|| Arc::new(FileBasedDatabase::new()) as Arc<dyn Database>);
}

#[linkme::distributed_slice(MODULES)]
static FILE_DATABASE_MODULE: ModuleEntry = ModuleEntry {
    name: DEFAULT_DATABASE_MODULE,
    description: "Entity store tracking attached entities",
    register,
};
