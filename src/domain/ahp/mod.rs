//! AHP Module - Analytic Hierarchy Process priority synthesis.
//!
//! Turns pairwise comparison judgments into consistency-checked priority
//! vectors and a global ranking of alternatives.
//!
//! # Components
//!
//! - `ComparisonMatrix` - Validated reciprocal judgment matrix
//! - `EigenSolver` - Principal eigenvector by power iteration
//! - `ConsistencyChecker` - CI / CR against a random-index table
//! - `HierarchySynthesizer` - Distributive synthesis across levels
//! - `AhpEngine` - Facade: validate, check, solve, synthesize
//!
//! # Design Philosophy
//!
//! Everything here is pure computation over immutable inputs. Structural
//! problems fail with `ValidationError`; inconsistency and numerical
//! trouble are attached to the result as verdicts and warnings.

mod comparison_matrix;
mod consistency;
pub mod corrective_actions;
mod definition;
mod eigen_solver;
mod engine;
mod errors;
mod events;
mod hierarchy;
mod random_index;
mod saaty_scale;
mod synthesizer;

pub use comparison_matrix::{
    ComparisonMatrix, ComparisonMatrixBuilder, DEFAULT_RECIPROCAL_TOLERANCE,
};
pub use consistency::{
    ConsistencyCheck, ConsistencyChecker, ConsistencyConfig, ConsistencyVerdict,
    DEFAULT_ACCEPTABLE_RATIO,
};
pub use definition::{ChildDefinition, HierarchyDefinition, JudgmentDefinition, NodeDefinition};
pub use eigen_solver::{
    EigenSolution, EigenSolver, PriorityVector, SolverConfig, DEFAULT_MAX_ITERATIONS,
    DEFAULT_TOLERANCE,
};
pub use engine::{AhpEngine, EngineConfig, MatrixReport, RankingResult};
pub use errors::{AhpWarning, ValidationError};
pub use events::AlternativesRanked;
pub use hierarchy::{Hierarchy, HierarchyChild, HierarchyNode};
pub use random_index::{RandomIndex, RandomIndexTable};
pub use saaty_scale::SaatyScale;
pub use synthesizer::{HierarchySynthesizer, NodeReport, Synthesis};
