//! Core traits for Weave
//!
//! Shared behaviors implemented by the workflow model: validation,
//! JSON persistence, and canvas positioning.

use crate::error::{WeaveError, WeaveResult};
use crate::types::Position;
use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `WeaveError` describing the problem.
    fn validate(&self) -> WeaveResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Persistable Trait
// ============================================================================

/// Trait for documents written to and read from pretty-printed JSON files
pub trait Persistable: Serialize + DeserializeOwned + Sized {
    /// File extension for this document type (without the dot)
    fn file_extension() -> &'static str;

    /// Serialize to a pretty-printed JSON string
    fn to_json(&self) -> WeaveResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Parse from a JSON string
    fn from_json(json: &str) -> WeaveResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Write to a file, creating parent directories as needed
    fn save_to_file(&self, path: &std::path::Path) -> WeaveResult<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| WeaveError::FileWrite {
                    path: parent.to_path_buf(),
                    message: e.to_string(),
                })?;
            }
        }
        std::fs::write(path, json).map_err(|e| WeaveError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read from a file
    fn load_from_file(path: &std::path::Path) -> WeaveResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| WeaveError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }
}

// ============================================================================
// Positioned Trait
// ============================================================================

/// Trait for types that have a position on the canvas
pub trait Positioned {
    /// Get the current position
    fn position(&self) -> Position;

    /// Set the position
    fn set_position(&mut self, position: Position);

    /// Move by a relative offset
    fn translate(&mut self, dx: f64, dy: f64) {
        let pos = self.position();
        self.set_position(pos.offset(dx, dy));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    struct TestValidatable {
        valid: bool,
    }

    impl Validatable for TestValidatable {
        fn validate(&self) -> WeaveResult<()> {
            if self.valid {
                Ok(())
            } else {
                Err(WeaveError::validation("Invalid state"))
            }
        }
    }

    #[test]
    fn test_validatable_trait() {
        let valid = TestValidatable { valid: true };
        assert!(valid.is_valid());
        assert!(valid.validation_errors().is_empty());

        let invalid = TestValidatable { valid: false };
        assert!(!invalid.is_valid());
        assert_eq!(
            invalid.validation_errors(),
            vec!["Validation error: Invalid state".to_string()]
        );
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        text: String,
    }

    impl Persistable for Note {
        fn file_extension() -> &'static str {
            "json"
        }
    }

    #[test]
    fn test_persistable_json() {
        let note = Note {
            text: "hello".to_string(),
        };
        let json = note.to_json().unwrap();
        assert!(json.contains('\n'));
        assert_eq!(Note::from_json(&json).unwrap(), note);
        assert!(Note::from_json("not json").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Note::load_from_file(std::path::Path::new("/definitely/missing.json")).unwrap_err();
        assert!(err.is_io());
    }

    struct Dot {
        at: Position,
    }

    impl Positioned for Dot {
        fn position(&self) -> Position {
            self.at
        }

        fn set_position(&mut self, position: Position) {
            self.at = position;
        }
    }

    #[test]
    fn test_positioned_translate() {
        let mut dot = Dot { at: Position::new(1.0, 2.0) };
        dot.translate(10.0, -2.0);
        assert_eq!(dot.position(), Position::new(11.0, 0.0));
    }
}
