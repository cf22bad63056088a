//! Hierarchy Synthesizer - Distributive synthesis of local priorities.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{
    AhpWarning, ConsistencyChecker, ConsistencyConfig, ConsistencyVerdict, EigenSolver,
    Hierarchy, HierarchyChild, HierarchyNode, SolverConfig,
};

/// What the synthesizer learned about one decision node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeReport {
    pub node_id: String,
    /// Product of local weights on the path from the root (root = 1).
    pub global_weight: f64,
    /// Child label -> local priority.
    pub local_priorities: BTreeMap<String, f64>,
    pub verdict: ConsistencyVerdict,
    pub iterations: usize,
    pub converged: bool,
}

/// Global alternative scores plus everything observed on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    pub scores: BTreeMap<String, f64>,
    /// Reports in depth-first visiting order.
    pub nodes: Vec<NodeReport>,
    pub warnings: Vec<AhpWarning>,
}

/// Combines local priority vectors across levels into global scores.
pub struct HierarchySynthesizer;

impl HierarchySynthesizer {
    /// Runs distributive synthesis over a hierarchy.
    ///
    /// # Algorithm
    /// Each node's children receive `node_global_weight * local_priority`.
    /// Criteria pass that weight further down; alternatives accumulate it,
    /// so an alternative's score is the sum over every root-to-leaf path of
    /// the product of local weights along the path.
    ///
    /// # Edge Cases
    /// - Alternatives never compared by any leaf matrix: score 0
    /// - Same alternative under several criteria: contributions are summed
    /// - Children missing from their parent's matrix receive nothing; call
    ///   [`Hierarchy::validate`] first to rule this out
    pub fn synthesize(
        hierarchy: &Hierarchy,
        solver: &SolverConfig,
        consistency: &ConsistencyConfig,
    ) -> Synthesis {
        let mut synthesis = Synthesis {
            scores: hierarchy
                .alternatives()
                .into_iter()
                .map(|id| (id, 0.0))
                .collect(),
            nodes: Vec::new(),
            warnings: Vec::new(),
        };

        Self::visit(&hierarchy.root, 1.0, solver, consistency, &mut synthesis);
        synthesis
    }

    fn visit(
        node: &HierarchyNode,
        global_weight: f64,
        solver: &SolverConfig,
        consistency: &ConsistencyConfig,
        synthesis: &mut Synthesis,
    ) {
        let solution = EigenSolver::solve(&node.matrix, solver);
        let check = ConsistencyChecker::check(&node.matrix, &solution.priorities, consistency);

        if !solution.converged {
            synthesis.warnings.push(AhpWarning::NonConvergence {
                node_id: node.id.clone(),
                iterations: solution.iterations,
                residual: solution.residual,
            });
        }
        if check.random_index_capped {
            synthesis.warnings.push(AhpWarning::UnboundedDimension {
                node_id: node.id.clone(),
                dimension: check.verdict.dimension,
                random_index: check.verdict.random_index,
            });
        }

        synthesis.nodes.push(NodeReport {
            node_id: node.id.clone(),
            global_weight,
            local_priorities: node
                .matrix
                .items()
                .iter()
                .cloned()
                .zip(solution.priorities.weights().iter().copied())
                .collect(),
            verdict: check.verdict,
            iterations: solution.iterations,
            converged: solution.converged,
        });

        for child in &node.children {
            let Some(local) = node
                .matrix
                .index_of(child.label())
                .and_then(|i| solution.priorities.get(i))
            else {
                continue;
            };
            let weight = global_weight * local;

            match child {
                HierarchyChild::Alternative(id) => {
                    *synthesis.scores.entry(id.clone()).or_insert(0.0) += weight;
                }
                HierarchyChild::Criterion(sub) => {
                    Self::visit(sub, weight, solver, consistency, synthesis);
                }
            }
        }
    }
}
