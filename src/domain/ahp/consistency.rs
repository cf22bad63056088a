//! Consistency Checker - Consistency index and ratio of a judgment matrix.

use serde::{Deserialize, Serialize};

use super::{ComparisonMatrix, PriorityVector, RandomIndexTable};

/// Consistency ratio below which judgments are considered reliable.
pub const DEFAULT_ACCEPTABLE_RATIO: f64 = 0.10;

/// Settings for judging consistency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyConfig {
    pub acceptable_ratio: f64,
    pub random_index: RandomIndexTable,
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            acceptable_ratio: DEFAULT_ACCEPTABLE_RATIO,
            random_index: RandomIndexTable::default(),
        }
    }
}

/// How far one matrix's judgments deviate from perfect transitivity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyVerdict {
    pub dimension: usize,
    pub lambda_max: f64,
    /// Consistency index.
    pub ci: f64,
    pub random_index: f64,
    /// Consistency ratio.
    pub cr: f64,
    pub is_acceptable: bool,
}

/// A verdict plus whether the random index had to be capped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyCheck {
    pub verdict: ConsistencyVerdict,
    pub random_index_capped: bool,
}

/// Consistency analysis functions.
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Estimates λ_max as the mean of (M·v)_i / v_i.
    ///
    /// Rows with a zero weight carry no information and are skipped.
    pub fn lambda_max(matrix: &ComparisonMatrix, priorities: &PriorityVector) -> f64 {
        let product = matrix.multiply(priorities.weights());
        let ratios: Vec<f64> = product
            .iter()
            .zip(priorities.weights())
            .filter(|(_, &w)| w > 0.0)
            .map(|(mv, w)| mv / w)
            .collect();

        if ratios.is_empty() {
            return matrix.dimension() as f64;
        }
        ratios.iter().sum::<f64>() / ratios.len() as f64
    }

    /// Computes CI, CR and acceptability for a matrix and its priorities.
    ///
    /// # Algorithm
    /// CI = (λ_max - n) / (n - 1), CR = CI / RI(n).
    ///
    /// # Edge Cases
    /// - n = 1: CI = 0, CR = 0
    /// - n <= 2: always acceptable (RI = 0, CR reported as 0)
    /// - λ_max slightly below n from rounding: CI clamped to 0
    /// - n beyond the RI table: largest tabulated RI, `random_index_capped`
    pub fn check(
        matrix: &ComparisonMatrix,
        priorities: &PriorityVector,
        config: &ConsistencyConfig,
    ) -> ConsistencyCheck {
        let n = matrix.dimension();
        let ri = config.random_index.lookup(n);

        let (lambda_max, ci) = if n <= 1 {
            (n as f64, 0.0)
        } else {
            let lambda_max = Self::lambda_max(matrix, priorities);
            let ci = ((lambda_max - n as f64) / (n as f64 - 1.0)).max(0.0);
            (lambda_max, ci)
        };

        let cr = if ri.value > 0.0 { ci / ri.value } else { 0.0 };

        ConsistencyCheck {
            verdict: ConsistencyVerdict {
                dimension: n,
                lambda_max,
                ci,
                random_index: ri.value,
                cr,
                is_acceptable: n <= 2 || cr < config.acceptable_ratio,
            },
            random_index_capped: ri.capped,
        }
    }
}
