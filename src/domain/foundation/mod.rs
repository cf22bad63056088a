//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, event infrastructure and the error
//! types shared by the ports and application layers.

mod errors;
mod events;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use events::{DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent};
pub use ids::HierarchyId;
pub use timestamp::Timestamp;
