//! In-memory hierarchy source.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::ahp::HierarchyDefinition;
use crate::domain::foundation::{DomainError, ErrorCode, HierarchyId};
use crate::ports::HierarchySource;

/// Map-backed hierarchy source.
///
/// Lets callers that already hold definitions in memory use the same
/// handler as file-backed deployments.
#[derive(Default)]
pub struct InMemoryHierarchySource {
    definitions: RwLock<HashMap<HierarchyId, HierarchyDefinition>>,
}

impl InMemoryHierarchySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces a definition.
    pub async fn insert(&self, id: HierarchyId, definition: HierarchyDefinition) {
        self.definitions.write().await.insert(id, definition);
    }

    /// Removes a definition, returning it if present.
    pub async fn remove(&self, id: &HierarchyId) -> Option<HierarchyDefinition> {
        self.definitions.write().await.remove(id)
    }
}

#[async_trait]
impl HierarchySource for InMemoryHierarchySource {
    async fn load(&self, id: &HierarchyId) -> Result<HierarchyDefinition, DomainError> {
        self.definitions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::HierarchyNotFound,
                    format!("Hierarchy not found: {}", id),
                )
                .with_detail("hierarchy_id", id.as_str())
            })
    }

    async fn list(&self) -> Result<Vec<HierarchyId>, DomainError> {
        let mut ids: Vec<HierarchyId> = self.definitions.read().await.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
