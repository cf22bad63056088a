//! Structural errors and advisory warnings raised by the AHP engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// A malformed comparison matrix or hierarchy.
///
/// These are the only hard failures of a ranking. Inconsistent judgments
/// are reported through [`super::ConsistencyVerdict`] instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Comparison matrix has no items")]
    EmptyMatrix,

    #[error("Comparison matrix must be square, got {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },

    #[error("Judgment ({row}, {column}) must be a positive finite number, got {value}")]
    NonPositiveEntry {
        row: String,
        column: String,
        value: f64,
    },

    #[error("Diagonal entry for '{item}' must be 1, got {value}")]
    DiagonalNotUnity { item: String, value: f64 },

    #[error("Judgments ({row}, {column}) = {forward} and ({column}, {row}) = {backward} are not reciprocal")]
    ReciprocalMismatch {
        row: String,
        column: String,
        forward: f64,
        backward: f64,
    },

    #[error("Judgment ({row}, {column}) given twice with different values {first} and {second}")]
    ConflictingJudgment {
        row: String,
        column: String,
        first: f64,
        second: f64,
    },

    #[error("Node '{node}' gives both explicit rows and judgments")]
    AmbiguousMatrixSource { node: String },

    #[error("Judgment references unknown item '{item}'")]
    UnknownItem { item: String },

    #[error("Item '{item}' appears more than once")]
    DuplicateItem { item: String },

    #[error("No judgment between '{row}' and '{column}'")]
    MissingJudgment { row: String, column: String },

    #[error("Node '{node}' has children {children:?} but its matrix compares {items:?}")]
    ChildMismatch {
        node: String,
        items: Vec<String>,
        children: Vec<String>,
    },

    #[error("Node id '{node}' is used more than once in the hierarchy")]
    DuplicateNode { node: String },
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::ChildMismatch { .. } | ValidationError::DuplicateNode { .. } => {
                ErrorCode::InvalidHierarchy
            }
            _ => ErrorCode::InvalidMatrix,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Advisory conditions attached to a ranking result.
///
/// A warning never prevents a ranking from being produced. Callers are
/// expected to surface them next to the scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AhpWarning {
    /// Power iteration hit its iteration bound before the iterates settled.
    NonConvergence {
        node_id: String,
        iterations: usize,
        residual: f64,
    },
    /// The matrix is larger than the random-index table; the largest
    /// tabulated value was used.
    UnboundedDimension {
        node_id: String,
        dimension: usize,
        random_index: f64,
    },
}

impl AhpWarning {
    /// The hierarchy node the warning belongs to.
    pub fn node_id(&self) -> &str {
        match self {
            AhpWarning::NonConvergence { node_id, .. } => node_id,
            AhpWarning::UnboundedDimension { node_id, .. } => node_id,
        }
    }
}

impl fmt::Display for AhpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AhpWarning::NonConvergence {
                node_id,
                iterations,
                residual,
            } => write!(
                f,
                "Priorities for '{}' did not converge after {} iterations (residual {:e})",
                node_id, iterations, residual
            ),
            AhpWarning::UnboundedDimension {
                node_id,
                dimension,
                random_index,
            } => write!(
                f,
                "Matrix '{}' has {} items, beyond the random index table; RI capped at {}",
                node_id, dimension, random_index
            ),
        }
    }
}
