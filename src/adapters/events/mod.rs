//! Event publisher adapters.
//!
//! - `InMemoryEventBus` - Captures events in process for testing
//! - `TracingEventPublisher` - Writes each event as a structured log line

mod in_memory;
mod tracing_publisher;

pub use in_memory::InMemoryEventBus;
pub use tracing_publisher::TracingEventPublisher;
