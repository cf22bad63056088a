//! Error types shared by the ports and application layers.
//!
//! Matrix and hierarchy problems are raised by the engine as
//! `domain::ahp::ValidationError` and converted into `DomainError` at the
//! application boundary.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidMatrix,
    InvalidHierarchy,

    // Not found errors
    HierarchyNotFound,

    // Infrastructure errors
    SourceUnavailable,
    MalformedDefinition,
    PublishFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidMatrix => "INVALID_MATRIX",
            ErrorCode::InvalidHierarchy => "INVALID_HIERARCHY",
            ErrorCode::HierarchyNotFound => "HIERARCHY_NOT_FOUND",
            ErrorCode::SourceUnavailable => "SOURCE_UNAVAILABLE",
            ErrorCode::MalformedDefinition => "MALFORMED_DEFINITION",
            ErrorCode::PublishFailed => "PUBLISH_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// True for errors caused by the caller's input rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ValidationFailed | ErrorCode::InvalidMatrix | ErrorCode::InvalidHierarchy
        )
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::HierarchyNotFound, "Hierarchy not found");
        assert_eq!(format!("{}", err), "[HIERARCHY_NOT_FOUND] Hierarchy not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::SourceUnavailable, "Read failed")
            .with_detail("path", "/tmp/goal.json")
            .with_detail("reason", "permission denied");

        assert_eq!(err.details.get("path"), Some(&"/tmp/goal.json".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"permission denied".to_string()));
    }

    #[test]
    fn validation_sets_field_detail() {
        let err = DomainError::validation("hierarchy_id", "cannot be empty");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"hierarchy_id".to_string()));
        assert!(err.is_validation());
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InvalidMatrix), "INVALID_MATRIX");
        assert_eq!(format!("{}", ErrorCode::PublishFailed), "PUBLISH_FAILED");
    }
}
