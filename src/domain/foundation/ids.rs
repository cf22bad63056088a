//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DomainError;

/// Identifier of a stored decision hierarchy.
///
/// Used as a file stem by the filesystem source, so path separators and
/// parent-directory references are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HierarchyId(String);

impl HierarchyId {
    /// Creates a HierarchyId, validating that it is a safe, non-empty name.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();

        if trimmed.is_empty() {
            return Err(DomainError::validation("hierarchy_id", "Hierarchy id cannot be empty"));
        }
        if trimmed.contains(['/', '\\']) || trimmed.starts_with('.') {
            return Err(DomainError::validation(
                "hierarchy_id",
                format!("Hierarchy id '{}' is not a plain name", trimmed),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HierarchyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
