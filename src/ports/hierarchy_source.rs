//! HierarchySource port - Loads stored judgment hierarchies.
//!
//! The surrounding pipeline turns dashboard input or CSV rows into the
//! nested definition form; this port is how the application reads it back.

use async_trait::async_trait;

use crate::domain::ahp::HierarchyDefinition;
use crate::domain::foundation::{DomainError, HierarchyId};

/// Read access to hierarchy definitions.
///
/// # Errors
///
/// - `ErrorCode::HierarchyNotFound` when no definition exists for the id
/// - `ErrorCode::MalformedDefinition` when stored data cannot be parsed
/// - `ErrorCode::SourceUnavailable` for I/O failures
#[async_trait]
pub trait HierarchySource: Send + Sync {
    /// Loads one hierarchy definition.
    async fn load(&self, id: &HierarchyId) -> Result<HierarchyDefinition, DomainError>;

    /// Lists the ids of every stored hierarchy, sorted.
    async fn list(&self) -> Result<Vec<HierarchyId>, DomainError>;
}
