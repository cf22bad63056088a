//! Eigen solver configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

/// Power-iteration settings
#[derive(Debug, Clone, Deserialize)]
pub struct SolverSettings {
    /// L1 change between iterations that counts as converged
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl SolverSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ValidationError::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(ValidationError::InvalidMaxIterations);
        }
        Ok(())
    }

    pub fn to_solver_config(&self) -> SolverConfig {
        SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}
