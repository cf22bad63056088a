//! Report formatting configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Largest precision that still rounds meaningfully in an f64
const MAX_PRECISION: u32 = 12;

/// How results are rounded for display
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Decimal places kept when printing scores and ratios
    #[serde(default = "default_precision")]
    pub precision: u32,
}

impl ReportConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.precision > MAX_PRECISION {
            return Err(ValidationError::PrecisionTooLarge(self.precision));
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

fn default_precision() -> u32 {
    3
}
