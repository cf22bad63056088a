//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `HierarchySource` - Where stored judgment hierarchies come from
//! - `EventPublisher` - Port for publishing domain events

mod event_publisher;
mod hierarchy_source;

pub use event_publisher::EventPublisher;
pub use hierarchy_source::HierarchySource;
