//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `hierarchy` - Hierarchy sources (filesystem, in-memory)
//! - `events` - Event publishers (in-memory capture, tracing log)

pub mod events;
pub mod hierarchy;

pub use events::{InMemoryEventBus, TracingEventPublisher};
pub use hierarchy::{FsHierarchySource, InMemoryHierarchySource};
