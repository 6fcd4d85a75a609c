//! Dotted paths into node data
//!
//! A [`ConfigPath`] addresses a location inside a node's data tree, for
//! example `config.layout.columns`. Segments are separated by `.`; a
//! segment made only of digits indexes into an array when the value at
//! that level is an array.

use crate::error::{WeaveError, WeaveResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A parsed, non-empty dotted path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigPath {
    segments: Vec<String>,
}

impl ConfigPath {
    /// Parse a dotted path, rejecting empty paths and empty segments
    pub fn parse(path: &str) -> WeaveResult<Self> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(WeaveError::invalid_path(path, "path is empty"));
        }

        let segments: Vec<String> = trimmed.split('.').map(str::to_string).collect();
        if let Some(idx) = segments.iter().position(|s| s.is_empty()) {
            return Err(WeaveError::invalid_path(
                path,
                format!("segment {} is empty", idx + 1),
            ));
        }

        Ok(Self { segments })
    }

    /// Build a path from already-split segments
    pub fn from_segments<I, S>(segments: I) -> WeaveResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        Self::parse(&segments.join("."))
    }

    /// All segments in order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments (always at least one)
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Paths are never empty; provided for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The first segment
    pub fn head(&self) -> &str {
        &self.segments[0]
    }

    /// The last segment, where the value is assigned
    pub fn leaf(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    /// The path without its first segment, `None` for single-segment paths
    pub fn tail(&self) -> Option<ConfigPath> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self {
            segments: self.segments[1..].to_vec(),
        })
    }

    /// Append a segment, returning a new path
    pub fn child(&self, segment: impl Into<String>) -> WeaveResult<ConfigPath> {
        let segment = segment.into();
        if segment.is_empty() || segment.contains('.') {
            return Err(WeaveError::invalid_path(
                format!("{}.{}", self, segment),
                "child segment must be non-empty and contain no dots",
            ));
        }
        let mut segments = self.segments.clone();
        segments.push(segment);
        Ok(Self { segments })
    }

    /// Check whether this path starts with the given segment
    pub fn starts_with(&self, segment: &str) -> bool {
        self.head() == segment
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for ConfigPath {
    type Err = WeaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ConfigPath {
    type Error = WeaveError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for ConfigPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ConfigPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_segments() {
        let path = ConfigPath::parse("config.layout.columns").unwrap();
        assert_eq!(path.segments(), &["config", "layout", "columns"]);
        assert_eq!(path.head(), "config");
        assert_eq!(path.leaf(), "columns");
        assert_eq!(path.len(), 3);
        assert_eq!(path.to_string(), "config.layout.columns");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(ConfigPath::parse("").unwrap_err().is_path());
        assert!(ConfigPath::parse("   ").unwrap_err().is_path());
        assert!(ConfigPath::parse("config..title").unwrap_err().is_path());
        assert!(ConfigPath::parse(".label").unwrap_err().is_path());
        assert!(ConfigPath::parse("label.").unwrap_err().is_path());
    }

    #[test]
    fn test_tail_and_child() {
        let path = ConfigPath::parse("config.confirmation").unwrap();
        let tail = path.tail().unwrap();
        assert_eq!(tail.to_string(), "confirmation");
        assert!(tail.tail().is_none());

        let child = path.child("message").unwrap();
        assert_eq!(child.to_string(), "config.confirmation.message");
        assert!(path.child("a.b").is_err());
        assert!(path.child("").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let path: ConfigPath = serde_json::from_str("\"config.title\"").unwrap();
        assert!(path.starts_with("config"));
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"config.title\"");
        assert!(serde_json::from_str::<ConfigPath>("\"a..b\"").is_err());
    }
}
