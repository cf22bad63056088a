//! Filesystem source for hierarchy definitions

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::ahp::HierarchyDefinition;
use crate::domain::foundation::{DomainError, ErrorCode, HierarchyId};
use crate::ports::HierarchySource;

/// Extensions probed in order when loading a hierarchy.
const EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Filesystem-based hierarchy source
///
/// Definitions live directly in a base directory as `{base_dir}/{id}.json`
/// or `{base_dir}/{id}.yaml`. When several files share a stem, JSON wins.
pub struct FsHierarchySource {
    base_dir: PathBuf,
}

impl FsHierarchySource {
    /// Create new source reading from `base_dir`
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    async fn find_file(&self, id: &HierarchyId) -> Result<Option<PathBuf>, DomainError> {
        for ext in EXTENSIONS {
            let path = self.base_dir.join(format!("{}.{}", id.as_str(), ext));
            match fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => return Ok(Some(path)),
                Ok(_) => continue,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(io_error(&path, e)),
            }
        }
        Ok(None)
    }
}

fn io_error(path: &Path, e: std::io::Error) -> DomainError {
    let message = if e.kind() == ErrorKind::PermissionDenied {
        format!("Cannot read {}: {}", path.display(), e)
    } else {
        format!("Failed to read {}: {}", path.display(), e)
    };
    DomainError::new(ErrorCode::SourceUnavailable, message)
        .with_detail("path", path.display().to_string())
}

fn parse(path: &Path, content: &str) -> Result<HierarchyDefinition, DomainError> {
    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    let parsed = if is_json {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| {
        DomainError::new(
            ErrorCode::MalformedDefinition,
            format!("Cannot parse {}: {}", path.display(), reason),
        )
        .with_detail("path", path.display().to_string())
    })
}

#[async_trait]
impl HierarchySource for FsHierarchySource {
    async fn load(&self, id: &HierarchyId) -> Result<HierarchyDefinition, DomainError> {
        let path = self.find_file(id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::HierarchyNotFound,
                format!("Hierarchy not found: {}", id),
            )
            .with_detail("hierarchy_id", id.as_str())
        })?;

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| io_error(&path, e))?;

        parse(&path, &content)
    }

    async fn list(&self) -> Result<Vec<HierarchyId>, DomainError> {
        let mut entries = match fs::read_dir(&self.base_dir).await {
            Ok(entries) => entries,
            // A missing directory simply holds no hierarchies
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&self.base_dir, e)),
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error(&self.base_dir, e))?
        {
            let path = entry.path();
            let has_known_ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| EXTENSIONS.contains(&e))
                .unwrap_or(false);
            if !has_known_ext {
                continue;
            }
            if let Some(id) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| HierarchyId::new(s).ok())
            {
                ids.push(id);
            }
        }

        ids.sort();
        ids.dedup();
        Ok(ids)
    }
}
