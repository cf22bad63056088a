//! AHP domain events.
//!
//! Published after a ranking completes so the dashboard can refresh scores
//! and show inconsistency badges without re-running the engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::RankingResult;
use crate::domain::foundation::{EventId, HierarchyId, Timestamp};

/// Published when the alternatives of a hierarchy have been ranked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativesRanked {
    /// Unique event identifier for deduplication.
    pub event_id: EventId,
    /// The hierarchy that was ranked.
    pub hierarchy_id: HierarchyId,
    /// Map of alternative_id -> global score.
    pub scores: BTreeMap<String, f64>,
    /// ID of the best-scoring alternative (None if tie or empty).
    pub best_alternative_id: Option<String>,
    /// Nodes whose consistency ratio exceeded the threshold.
    pub inconsistent_nodes: Vec<String>,
    /// Number of advisory warnings attached to the ranking.
    pub warning_count: usize,
    /// When the ranking was computed.
    pub computed_at: Timestamp,
}

crate::domain_event!(
    AlternativesRanked,
    event_type = "ahp.alternatives_ranked.v1",
    schema_version = 1,
    aggregate_id = hierarchy_id,
    aggregate_type = "Hierarchy",
    occurred_at = computed_at,
    event_id = event_id
);

impl AlternativesRanked {
    /// Summarizes a ranking result.
    pub fn from_result(hierarchy_id: HierarchyId, result: &RankingResult) -> Self {
        Self {
            event_id: EventId::new(),
            hierarchy_id,
            scores: result.scores.clone(),
            best_alternative_id: result.best(),
            inconsistent_nodes: result.inconsistent_nodes(),
            warning_count: result.warnings.len(),
            computed_at: Timestamp::now(),
        }
    }
}
