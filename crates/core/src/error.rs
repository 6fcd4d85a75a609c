//! Error types for Weave
//!
//! This module provides unified error handling across the builder,
//! including path errors, schema errors, graph errors, IO and
//! serialization failures.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Weave
#[derive(Debug, Error)]
pub enum WeaveError {
    // ========================================================================
    // Path Errors
    // ========================================================================
    /// Dotted path could not be parsed
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// An intermediate path segment holds a leaf value
    #[error("Cannot descend into '{segment}' of '{path}': value is a {found}")]
    PathConflict {
        path: String,
        segment: String,
        found: String,
    },

    // ========================================================================
    // Schema Errors
    // ========================================================================
    /// Path is not declared in the editor schema of the node type
    #[error("Field '{path}' is not editable on {node_type} nodes")]
    UnknownField { node_type: String, path: String },

    /// Value kind does not match the declared widget
    #[error("Type mismatch at '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// A validation rule rejected the value
    #[error("Validation failed for '{node}.{path}': {message}")]
    FieldValidation {
        node: String,
        path: String,
        message: String,
    },

    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ========================================================================
    // Graph Errors
    // ========================================================================
    /// Node not found
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Edge not found
    #[error("Edge not found: {0}")]
    EdgeNotFound(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// The document parsed but is not a workflow
    #[error("Invalid workflow file format: {0}")]
    InvalidWorkflowFormat(String),

    // ========================================================================
    // UI Errors
    // ========================================================================
    /// UI state error
    #[error("UI state error: {0}")]
    UiState(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Operation cancelled by user
    #[error("Operation cancelled")]
    Cancelled,

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl WeaveError {
    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        WeaveError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        WeaveError::Validation(msg.into())
    }

    /// Create a field validation error
    pub fn field_validation(
        node: impl Into<String>,
        path: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        WeaveError::FieldValidation {
            node: node.into(),
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        WeaveError::TypeMismatch {
            path: path.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        WeaveError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        WeaveError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error came from the editor schema or a validation rule
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WeaveError::Validation(_)
                | WeaveError::FieldValidation { .. }
                | WeaveError::UnknownField { .. }
                | WeaveError::TypeMismatch { .. }
        )
    }

    /// Check if this error is a path error
    pub fn is_path(&self) -> bool {
        matches!(
            self,
            WeaveError::InvalidPath { .. } | WeaveError::PathConflict { .. }
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, WeaveError::NodeNotFound(_) | WeaveError::EdgeNotFound(_))
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            WeaveError::Io(_) | WeaveError::FileRead { .. } | WeaveError::FileWrite { .. }
        )
    }

    /// Check if the user dismissed the operation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, WeaveError::Cancelled)
    }
}

/// Result type alias using WeaveError
pub type WeaveResult<T> = Result<T, WeaveError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> WeaveResult<T>;
}

impl<T, E: Into<WeaveError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> WeaveResult<T> {
        self.map_err(|e| {
            let err: WeaveError = e.into();
            WeaveError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_error() {
        let err = WeaveError::invalid_path("config..title", "empty segment");
        assert!(err.is_path());
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid path 'config..title': empty segment"
        );
    }

    #[test]
    fn test_field_validation_error() {
        let err = WeaveError::field_validation("tableNode-1", "config.pageSize", "must be at most 100");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation failed for 'tableNode-1.config.pageSize': must be at most 100"
        );
    }

    #[test]
    fn test_schema_errors_are_validation() {
        let err = WeaveError::UnknownField {
            node_type: "tableNode".to_string(),
            path: "config.bogus".to_string(),
        };
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Field 'config.bogus' is not editable on tableNode nodes"
        );

        let err = WeaveError::type_mismatch("config.pagination", "boolean", "string");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Type mismatch at 'config.pagination': expected boolean, found string"
        );
    }

    #[test]
    fn test_not_found_errors() {
        let err = WeaveError::NodeNotFound("formNode-42".to_string());
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Node not found: formNode-42");
    }

    #[test]
    fn test_error_with_context() {
        let err = WeaveError::with_context("Importing workflow", "unexpected end of input");
        assert_eq!(err.to_string(), "Importing workflow: unexpected end of input");
    }

    #[test]
    fn test_result_ext_wraps_json_error() {
        let parsed: Result<serde_json::Value, serde_json::Error> = serde_json::from_str("{");
        let err = parsed.with_context("Importing workflow").unwrap_err();
        assert!(err.to_string().starts_with("Importing workflow: JSON serialization error"));
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WeaveError = io_err.into();
        assert!(err.is_io());
        assert!(!WeaveError::Cancelled.is_io());
        assert!(WeaveError::Cancelled.is_cancelled());
    }
}
