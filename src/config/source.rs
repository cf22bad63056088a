//! Hierarchy source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where stored hierarchy definitions are read from
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_hierarchy_dir")]
    pub hierarchy_dir: PathBuf,
}

impl SourceConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.hierarchy_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("source.hierarchy_dir"));
        }
        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            hierarchy_dir: default_hierarchy_dir(),
        }
    }
}

fn default_hierarchy_dir() -> PathBuf {
    PathBuf::from("./hierarchies")
}
