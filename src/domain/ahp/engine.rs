//! AHP Engine - Facade ranking alternatives over a decision hierarchy.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::eigen_solver::round_to;
use super::{
    AhpWarning, ComparisonMatrix, ConsistencyChecker, ConsistencyConfig, ConsistencyVerdict,
    EigenSolver, Hierarchy, HierarchyDefinition, HierarchySynthesizer, SolverConfig,
    ValidationError, DEFAULT_RECIPROCAL_TOLERANCE,
};

/// Everything the engine needs to know; immutable for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub solver: SolverConfig,
    pub consistency: ConsistencyConfig,
    pub reciprocal_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            consistency: ConsistencyConfig::default(),
            reciprocal_tolerance: DEFAULT_RECIPROCAL_TOLERANCE,
        }
    }
}

/// Global ranking of alternatives plus per-node diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    /// Alternative id -> global score. Scores sum to 1.
    pub scores: BTreeMap<String, f64>,
    /// Node id -> consistency verdict, one per decision node.
    pub consistency: BTreeMap<String, ConsistencyVerdict>,
    /// Node id -> (child label -> local priority).
    pub local_priorities: BTreeMap<String, BTreeMap<String, f64>>,
    pub warnings: Vec<AhpWarning>,
}

impl RankingResult {
    /// Alternatives sorted by descending score, ties broken by id.
    pub fn ranked(&self) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .scores
            .iter()
            .map(|(id, score)| (id.clone(), *score))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked
    }

    /// The top alternative. Returns None if empty or if the top score is tied.
    pub fn best(&self) -> Option<String> {
        let ranked = self.ranked();
        match ranked.as_slice() {
            [] => None,
            [(id, _)] => Some(id.clone()),
            [(id, first), (_, second), ..] => (first > second).then(|| id.clone()),
        }
    }

    /// Ids of nodes whose judgments failed the consistency threshold.
    pub fn inconsistent_nodes(&self) -> Vec<String> {
        self.consistency
            .iter()
            .filter(|(_, v)| !v.is_acceptable)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// True when every node's judgments are acceptably consistent.
    pub fn is_consistent(&self) -> bool {
        self.consistency.values().all(|v| v.is_acceptable)
    }

    /// Copy with every score and local priority rounded for display.
    pub fn rounded(&self, precision: u32) -> Self {
        let round_map = |m: &BTreeMap<String, f64>| -> BTreeMap<String, f64> {
            m.iter()
                .map(|(k, v)| (k.clone(), round_to(*v, precision)))
                .collect()
        };

        Self {
            scores: round_map(&self.scores),
            consistency: self
                .consistency
                .iter()
                .map(|(id, v)| (id.clone(), round_verdict(v, precision)))
                .collect(),
            local_priorities: self
                .local_priorities
                .iter()
                .map(|(id, m)| (id.clone(), round_map(m)))
                .collect(),
            warnings: self.warnings.clone(),
        }
    }
}

fn round_verdict(verdict: &ConsistencyVerdict, precision: u32) -> ConsistencyVerdict {
    ConsistencyVerdict {
        lambda_max: round_to(verdict.lambda_max, precision),
        ci: round_to(verdict.ci, precision),
        cr: round_to(verdict.cr, precision),
        ..*verdict
    }
}

/// Priorities and consistency of a single comparison matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixReport {
    pub name: String,
    /// Item -> local priority.
    pub priorities: BTreeMap<String, f64>,
    pub verdict: ConsistencyVerdict,
    pub warnings: Vec<AhpWarning>,
}

impl MatrixReport {
    /// Copy with priorities and ratios rounded for display.
    pub fn rounded(&self, precision: u32) -> Self {
        Self {
            name: self.name.clone(),
            priorities: self
                .priorities
                .iter()
                .map(|(k, v)| (k.clone(), round_to(*v, precision)))
                .collect(),
            verdict: round_verdict(&self.verdict, precision),
            warnings: self.warnings.clone(),
        }
    }
}

/// Stateless AHP ranking service.
///
/// Holds only its configuration, so one instance may be shared freely
/// across threads and tasks.
#[derive(Debug, Clone, Default)]
pub struct AhpEngine {
    config: EngineConfig,
}

impl AhpEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ranks the alternatives of a hierarchy.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when any matrix is malformed or a node's
    /// children do not match its matrix. Inconsistent judgments and
    /// numerical trouble are reported in the result, never as errors.
    pub fn rank(&self, hierarchy: &Hierarchy) -> Result<RankingResult, ValidationError> {
        hierarchy.validate(self.config.reciprocal_tolerance)?;

        let synthesis = HierarchySynthesizer::synthesize(
            hierarchy,
            &self.config.solver,
            &self.config.consistency,
        );

        let mut consistency = BTreeMap::new();
        let mut local_priorities = BTreeMap::new();
        for report in synthesis.nodes {
            if !report.verdict.is_acceptable {
                warn!(
                    node_id = %report.node_id,
                    cr = report.verdict.cr,
                    "Judgments are inconsistent; consider revising them"
                );
            }
            consistency.insert(report.node_id.clone(), report.verdict);
            local_priorities.insert(report.node_id, report.local_priorities);
        }
        for warning in &synthesis.warnings {
            warn!(node_id = %warning.node_id(), "{}", warning);
        }

        debug!(
            root = %hierarchy.root.id,
            nodes = consistency.len(),
            alternatives = synthesis.scores.len(),
            "Ranked alternatives"
        );

        Ok(RankingResult {
            scores: synthesis.scores,
            consistency,
            local_priorities,
            warnings: synthesis.warnings,
        })
    }

    /// Builds a hierarchy from its plain nested form, then ranks it.
    pub fn rank_definition(
        &self,
        definition: &HierarchyDefinition,
    ) -> Result<RankingResult, ValidationError> {
        let hierarchy = definition.to_hierarchy(self.config.reciprocal_tolerance)?;
        self.rank(&hierarchy)
    }

    /// Evaluates one named comparison matrix on its own.
    pub fn compare(
        &self,
        name: &str,
        matrix: &ComparisonMatrix,
    ) -> Result<MatrixReport, ValidationError> {
        matrix.validate(self.config.reciprocal_tolerance)?;

        let solution = EigenSolver::solve(matrix, &self.config.solver);
        let check =
            ConsistencyChecker::check(matrix, &solution.priorities, &self.config.consistency);

        let mut warnings = Vec::new();
        if !solution.converged {
            warnings.push(AhpWarning::NonConvergence {
                node_id: name.to_string(),
                iterations: solution.iterations,
                residual: solution.residual,
            });
        }
        if check.random_index_capped {
            warnings.push(AhpWarning::UnboundedDimension {
                node_id: name.to_string(),
                dimension: check.verdict.dimension,
                random_index: check.verdict.random_index,
            });
        }

        Ok(MatrixReport {
            name: name.to_string(),
            priorities: matrix
                .items()
                .iter()
                .cloned()
                .zip(solution.priorities.weights().iter().copied())
                .collect(),
            verdict: check.verdict,
            warnings,
        })
    }
}
