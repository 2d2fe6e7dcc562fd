//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ContractId`] | Identifier of a capability contract, the resolution key |
//! | [`ModuleDescriptor`] | Named loadable unit and where it was found |
//! | [`TraceEvent`] | One immutable row of the diagnostic trace |
//! | [`EntityEntry`] | Handle returned when an entity is attached to a database |

/// Capability contract identifiers
pub mod contract;
/// Entity values exchanged with the persistence collaborator
pub mod entity;
/// Module descriptors
pub mod module;
/// Diagnostic trace events
pub mod trace;

// Re-export commonly used value objects
pub use contract::ContractId;
pub use entity::{EntityEntry, KeyValues};
pub use module::{ModuleDescriptor, ModuleLocation};
pub use trace::{TraceEvent, TraceLevel, TraceState};
