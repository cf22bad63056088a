//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `KPI_AHP` prefix and
//! nested values are separated by a double underscore. Every setting has a
//! default, so an empty environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use kpi_ahp::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let engine = kpi_ahp::domain::ahp::AhpEngine::new(config.engine_config());
//! ```

mod consistency;
mod error;
mod logging;
mod report;
mod solver;
mod source;

pub use consistency::ConsistencySettings;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use report::ReportConfig;
pub use solver::SolverSettings;
pub use source::SourceConfig;

use serde::Deserialize;

use crate::domain::ahp::EngineConfig;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Power iteration (tolerance, iteration cap)
    #[serde(default)]
    pub solver: SolverSettings,

    /// Consistency threshold, random-index table, reciprocal tolerance
    #[serde(default)]
    pub consistency: ConsistencySettings,

    /// Display rounding
    #[serde(default)]
    pub report: ReportConfig,

    /// Hierarchy definition directory
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `KPI_AHP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `KPI_AHP__SOLVER__MAX_ITERATIONS=500` -> `solver.max_iterations = 500`
    /// - `KPI_AHP__CONSISTENCY__RANDOM_INDEX=donegan_dodd`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("KPI_AHP")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration and reject invalid values in one step
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when parsing fails,
    /// `ConfigError::ValidationFailed` when a value is out of range.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.solver.validate()?;
        self.consistency.validate()?;
        self.report.validate()?;
        self.source.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Engine settings derived from the solver and consistency sections.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            solver: self.solver.to_solver_config(),
            consistency: self.consistency.to_consistency_config(),
            reciprocal_tolerance: self.consistency.reciprocal_tolerance,
        }
    }
}
