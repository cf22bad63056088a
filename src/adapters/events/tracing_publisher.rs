//! Event publisher that writes events to the tracing log.
//!
//! Used by the command-line binary, where there is no message bus and the
//! log is the only downstream consumer.

use async_trait::async_trait;
use tracing::info;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Logs every published event at `info` under the `kpi_ahp::events` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher;

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        info!(
            target: "kpi_ahp::events",
            event_id = %event.event_id,
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            payload = %event.payload,
            "Event published"
        );
        Ok(())
    }
}
