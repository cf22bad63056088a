//! Consistency checking configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{
    ConsistencyConfig, RandomIndexTable, DEFAULT_ACCEPTABLE_RATIO, DEFAULT_RECIPROCAL_TOLERANCE,
};

/// Consistency and matrix validation settings
#[derive(Debug, Clone, Deserialize)]
pub struct ConsistencySettings {
    /// CR strictly below this is acceptable
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// `saaty` or `donegan_dodd`
    #[serde(default)]
    pub random_index: RandomIndexTable,

    /// Allowed relative error in `a[i][j] * a[j][i] == 1`
    #[serde(default = "default_reciprocal_tolerance")]
    pub reciprocal_tolerance: f64,
}

impl ConsistencySettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ValidationError::InvalidThreshold(self.threshold));
        }
        if !(self.reciprocal_tolerance >= 0.0 && self.reciprocal_tolerance < 1.0) {
            return Err(ValidationError::InvalidReciprocalTolerance(
                self.reciprocal_tolerance,
            ));
        }
        Ok(())
    }

    pub fn to_consistency_config(&self) -> ConsistencyConfig {
        ConsistencyConfig {
            acceptable_ratio: self.threshold,
            random_index: self.random_index,
        }
    }
}

impl Default for ConsistencySettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            random_index: RandomIndexTable::default(),
            reciprocal_tolerance: default_reciprocal_tolerance(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_ACCEPTABLE_RATIO
}

fn default_reciprocal_tolerance() -> f64 {
    DEFAULT_RECIPROCAL_TOLERANCE
}
