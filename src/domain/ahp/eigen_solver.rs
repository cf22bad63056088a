//! Eigen-Priority Solver - Principal eigenvector by power iteration.

use serde::{Deserialize, Serialize};

use super::ComparisonMatrix;

/// Default L1 change between iterates below which iteration stops.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Default iteration bound.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Bounds for power iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Normalized weights aligned with a matrix's rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityVector(Vec<f64>);

impl PriorityVector {
    /// Creates the uniform vector 1/n.
    pub fn uniform(n: usize) -> Self {
        if n == 0 {
            return Self(Vec::new());
        }
        Self(vec![1.0 / n as f64; n])
    }

    /// Scales arbitrary non-negative weights so they sum to 1.
    ///
    /// All-zero input yields the uniform vector.
    pub fn normalized(weights: Vec<f64>) -> Self {
        let total: f64 = weights.iter().sum();
        if total > 0.0 && total.is_finite() {
            Self(weights.into_iter().map(|w| w / total).collect())
        } else {
            Self::uniform(weights.len())
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Returns the weights rounded to `precision` decimal places.
    pub fn rounded(&self, precision: u32) -> Vec<f64> {
        self.0.iter().map(|&w| round_to(w, precision)).collect()
    }
}

/// Output of one power iteration run.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenSolution {
    pub priorities: PriorityVector,
    pub iterations: usize,
    pub converged: bool,
    /// L1 change of the final step.
    pub residual: f64,
}

/// Power-iteration solver for the principal right eigenvector.
pub struct EigenSolver;

impl EigenSolver {
    /// Derives the priority vector of a validated matrix.
    ///
    /// # Algorithm
    /// Start from the uniform vector and repeat `v <- normalize(M·v)` until
    /// the L1 distance between successive iterates drops below
    /// `config.tolerance` or `config.max_iterations` steps have run.
    ///
    /// # Edge Cases
    /// - n = 1: returns `[1.0]` immediately, converged
    /// - Iteration bound reached: returns the last iterate with
    ///   `converged = false`
    pub fn solve(matrix: &ComparisonMatrix, config: &SolverConfig) -> EigenSolution {
        let n = matrix.dimension();
        if n <= 1 {
            return EigenSolution {
                priorities: PriorityVector::uniform(n),
                iterations: 0,
                converged: true,
                residual: 0.0,
            };
        }

        let mut current = PriorityVector::uniform(n);
        let mut residual = f64::INFINITY;

        for iteration in 1..=config.max_iterations {
            let next = PriorityVector::normalized(matrix.multiply(current.weights()));
            residual = l1_distance(next.weights(), current.weights());
            current = next;

            if residual < config.tolerance {
                return EigenSolution {
                    priorities: current,
                    iterations: iteration,
                    converged: true,
                    residual,
                };
            }
        }

        EigenSolution {
            priorities: current,
            iterations: config.max_iterations,
            converged: false,
            residual,
        }
    }
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

pub(crate) fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}
