//! RankAlternativesHandler - Command handler for ranking a stored hierarchy.
//!
//! Loads the definition from a `HierarchySource`, runs the engine and
//! publishes `AlternativesRanked` so downstream views can refresh.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::domain::ahp::{AhpEngine, AlternativesRanked, RankingResult};
use crate::domain::foundation::{DomainError, HierarchyId, SerializableDomainEvent};
use crate::ports::{EventPublisher, HierarchySource};

/// Command to rank the alternatives of one stored hierarchy.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    pub hierarchy_id: HierarchyId,
    pub correlation_id: Option<String>,
}

impl RankAlternativesCommand {
    pub fn new(hierarchy_id: HierarchyId) -> Self {
        Self {
            hierarchy_id,
            correlation_id: None,
        }
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }
}

/// Result of a successful ranking.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    pub hierarchy_id: HierarchyId,
    pub ranking: RankingResult,
    pub event: AlternativesRanked,
}

/// Handler for ranking hierarchies.
pub struct RankAlternativesHandler {
    source: Arc<dyn HierarchySource>,
    event_publisher: Arc<dyn EventPublisher>,
    engine: AhpEngine,
}

impl RankAlternativesHandler {
    pub fn new(
        source: Arc<dyn HierarchySource>,
        event_publisher: Arc<dyn EventPublisher>,
        engine: AhpEngine,
    ) -> Self {
        Self {
            source,
            event_publisher,
            engine,
        }
    }

    pub fn engine(&self) -> &AhpEngine {
        &self.engine
    }

    pub async fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, DomainError> {
        // 1. Load definition
        let definition = self.source.load(&cmd.hierarchy_id).await?;

        // 2. Rank
        let ranking = self.engine.rank_definition(&definition).map_err(|e| {
            DomainError::from(e).with_detail("hierarchy_id", cmd.hierarchy_id.as_str())
        })?;

        if !ranking.is_consistent() {
            warn!(
                hierarchy_id = %cmd.hierarchy_id,
                nodes = ?ranking.inconsistent_nodes(),
                "Ranking includes inconsistent judgments"
            );
        }

        // 3. Publish event
        let event = AlternativesRanked::from_result(cmd.hierarchy_id.clone(), &ranking);
        let mut envelope = event.to_envelope();
        if let Some(correlation_id) = &cmd.correlation_id {
            envelope = envelope.with_correlation_id(correlation_id.clone());
        }
        self.event_publisher.publish(envelope).await?;

        debug!(
            hierarchy_id = %cmd.hierarchy_id,
            event_id = %event.event_id,
            "Published AlternativesRanked event"
        );
        info!(
            hierarchy_id = %cmd.hierarchy_id,
            best = ?event.best_alternative_id,
            "Alternatives ranked"
        );

        Ok(RankAlternativesResult {
            hierarchy_id: cmd.hierarchy_id,
            ranking,
            event,
        })
    }

    /// Ranks several hierarchies concurrently.
    ///
    /// Results come back in command order; one failure does not affect
    /// the others.
    pub async fn handle_many(
        &self,
        cmds: Vec<RankAlternativesCommand>,
    ) -> Vec<Result<RankAlternativesResult, DomainError>> {
        join_all(cmds.into_iter().map(|cmd| self.handle(cmd))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryEventBus, InMemoryHierarchySource};
    use crate::domain::ahp::HierarchyDefinition;
    use crate::domain::foundation::{ErrorCode, EventEnvelope};
    use async_trait::async_trait;

    const TWO_LEVEL: &str = r#"{
        "alternatives": ["X", "Y", "Z"],
        "root": {
            "id": "goal",
            "judgments": [["Cost", "Speed", 3]],
            "children": [
                {"id": "Cost", "judgments": [["X", "Y", 1]], "children": ["X", "Y"]},
                {"id": "Speed", "judgments": [["X", "Y", 1]], "children": ["X", "Y"]}
            ]
        }
    }"#;

    const INCONSISTENT: &str = r#"{
        "root": {
            "id": "goal",
            "judgments": [["A", "B", 5], ["B", "C", 5], ["C", "A", 5]],
            "children": ["A", "B", "C"]
        }
    }"#;

    const NOT_RECIPROCAL: &str = r#"{
        "root": {"id": "goal", "rows": [[1, 2], [2, 1]], "children": ["A", "B"]}
    }"#;

    struct FailingPublisher;

    #[async_trait]
    impl EventPublisher for FailingPublisher {
        async fn publish(&self, _event: EventEnvelope) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::PublishFailed, "bus down"))
        }
    }

    fn id(s: &str) -> HierarchyId {
        HierarchyId::new(s).unwrap()
    }

    fn parse(json: &str) -> HierarchyDefinition {
        serde_json::from_str(json).unwrap()
    }

    async fn setup() -> (RankAlternativesHandler, Arc<InMemoryEventBus>) {
        let source = Arc::new(InMemoryHierarchySource::new());
        source.insert(id("two-level"), parse(TWO_LEVEL)).await;
        source.insert(id("inconsistent"), parse(INCONSISTENT)).await;
        source.insert(id("bad"), parse(NOT_RECIPROCAL)).await;

        let bus = Arc::new(InMemoryEventBus::new());
        let handler = RankAlternativesHandler::new(source, bus.clone(), AhpEngine::default());
        (handler, bus)
    }

    #[tokio::test]
    async fn ranks_and_publishes_event() {
        let (handler, bus) = setup().await;

        let result = handler
            .handle(RankAlternativesCommand::new(id("two-level")).with_correlation_id("req-7"))
            .await
            .unwrap();

        assert!((result.ranking.scores["X"] - 0.5).abs() < 1e-9);
        assert_eq!(result.ranking.scores["Z"], 0.0);
        assert_eq!(result.event.best_alternative_id, None);

        let events = bus.events_of_type("ahp.alternatives_ranked.v1");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].aggregate_id, "two-level");
        assert_eq!(events[0].metadata.correlation_id.as_deref(), Some("req-7"));
    }

    #[tokio::test]
    async fn inconsistent_hierarchy_still_ranks() {
        let (handler, bus) = setup().await;

        let result = handler
            .handle(RankAlternativesCommand::new(id("inconsistent")))
            .await
            .unwrap();

        assert!(!result.ranking.is_consistent());
        assert_eq!(result.event.inconsistent_nodes, vec!["goal".to_string()]);
        assert_eq!(bus.event_count(), 1);
    }

    #[tokio::test]
    async fn invalid_matrix_is_validation_error() {
        let (handler, bus) = setup().await;

        let err = handler
            .handle(RankAlternativesCommand::new(id("bad")))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidMatrix);
        assert!(err.is_validation());
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn unknown_hierarchy_is_not_found() {
        let (handler, _bus) = setup().await;

        let err = handler
            .handle(RankAlternativesCommand::new(id("ghost")))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::HierarchyNotFound);
    }

    #[tokio::test]
    async fn publish_failure_propagates() {
        let source = Arc::new(InMemoryHierarchySource::new());
        source.insert(id("two-level"), parse(TWO_LEVEL)).await;
        let handler =
            RankAlternativesHandler::new(source, Arc::new(FailingPublisher), AhpEngine::default());

        let err = handler
            .handle(RankAlternativesCommand::new(id("two-level")))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::PublishFailed);
    }

    #[tokio::test]
    async fn handle_many_keeps_order_and_isolates_failures() {
        let (handler, bus) = setup().await;

        let results = handler
            .handle_many(vec![
                RankAlternativesCommand::new(id("two-level")),
                RankAlternativesCommand::new(id("ghost")),
                RankAlternativesCommand::new(id("inconsistent")),
            ])
            .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().hierarchy_id.as_str(), "two-level");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().hierarchy_id.as_str(), "inconsistent");
        assert_eq!(bus.event_count(), 2);
    }
}
