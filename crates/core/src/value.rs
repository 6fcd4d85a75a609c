//! Configuration values
//!
//! Node data is stored as a tree of [`ConfigValue`]s: objects (mappings)
//! branch, everything else is a leaf. The path accessors walk the tree
//! one [`ConfigPath`] segment at a time.

use crate::error::{WeaveError, WeaveResult};
use crate::path::ConfigPath;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Mapping level of a config tree
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// Dynamic configuration value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<ConfigValue>),
    Object(ConfigMap),
}

/// Shape of a value, used in error messages and schema checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        write!(f, "{}", name)
    }
}

impl ConfigValue {
    /// An empty object
    pub fn object() -> Self {
        ConfigValue::Object(ConfigMap::new())
    }

    /// Build an object from key/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ConfigValue>,
    {
        ConfigValue::Object(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Convert any serializable value into a config tree
    pub fn from_serializable<T: Serialize>(value: &T) -> WeaveResult<Self> {
        let json = serde_json::to_value(value)?;
        Ok(Self::from(json))
    }

    /// Deserialize the tree into a typed structure
    pub fn to_typed<T: DeserializeOwned>(&self) -> WeaveResult<T> {
        let json = serde_json::to_value(self)?;
        Ok(serde_json::from_value(json)?)
    }

    /// The kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            ConfigValue::Null => ValueKind::Null,
            ConfigValue::Bool(_) => ValueKind::Bool,
            ConfigValue::Int(_) | ConfigValue::Float(_) => ValueKind::Number,
            ConfigValue::String(_) => ValueKind::String,
            ConfigValue::Array(_) => ValueKind::Array,
            ConfigValue::Object(_) => ValueKind::Object,
        }
    }

    // ========================================================================
    // Leaf Accessors
    // ========================================================================

    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as integer (floats with no fractional part qualify)
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(v) => Some(*v),
            ConfigValue::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(*v as i64),
            _ => None,
        }
    }

    /// Try to get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(v) => Some(*v),
            ConfigValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Try to get as array
    pub fn as_array(&self) -> Option<&Vec<ConfigValue>> {
        match self {
            ConfigValue::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as object
    pub fn as_object(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Object(v) => Some(v),
            _ => None,
        }
    }

    /// Collect an array of strings, skipping non-string items
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        self.as_array().map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
    }

    /// Check if null
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Check if object
    pub fn is_object(&self) -> bool {
        matches!(self, ConfigValue::Object(_))
    }

    // ========================================================================
    // Path Access
    // ========================================================================

    /// Look up the value at `path`
    pub fn get_path(&self, path: &ConfigPath) -> Option<&ConfigValue> {
        path.segments()
            .iter()
            .try_fold(self, |current, segment| current.child(segment))
    }

    /// Mutable lookup of the value at `path`
    pub fn get_path_mut(&mut self, path: &ConfigPath) -> Option<&mut ConfigValue> {
        let mut current = self;
        for segment in path.segments() {
            current = current.child_mut(segment)?;
        }
        Some(current)
    }

    /// Look up a value by dotted path string; malformed paths read as absent
    pub fn lookup(&self, path: &str) -> Option<&ConfigValue> {
        ConfigPath::parse(path)
            .ok()
            .and_then(|p| self.get_path(&p))
    }

    /// Assign `value` at `path`, creating empty objects for missing or null
    /// intermediate segments. Sibling keys at every level are left as they
    /// were. Returns the value previously stored at `path`, if any.
    pub fn set_path(
        &mut self,
        path: &ConfigPath,
        value: ConfigValue,
    ) -> WeaveResult<Option<ConfigValue>> {
        if self.is_null() {
            *self = ConfigValue::object();
        }

        let segments = path.segments();
        let (leaf, parents) = match segments.split_last() {
            Some(split) => split,
            None => return Err(WeaveError::invalid_path("", "path is empty")),
        };

        let mut current = self;
        for segment in parents {
            current = current.descend_or_create(path, segment)?;
        }

        match current {
            ConfigValue::Object(map) => Ok(map.insert(leaf.clone(), value)),
            ConfigValue::Array(items) => match leaf.parse::<usize>() {
                Ok(idx) if idx < items.len() => Ok(Some(std::mem::replace(&mut items[idx], value))),
                Ok(idx) if idx == items.len() => {
                    items.push(value);
                    Ok(None)
                }
                _ => Err(WeaveError::PathConflict {
                    path: path.to_string(),
                    segment: leaf.clone(),
                    found: ValueKind::Array.to_string(),
                }),
            },
            other => Err(WeaveError::PathConflict {
                path: path.to_string(),
                segment: leaf.clone(),
                found: other.kind().to_string(),
            }),
        }
    }

    /// Remove and return the value at `path`
    pub fn remove_path(&mut self, path: &ConfigPath) -> Option<ConfigValue> {
        let segments = path.segments();
        let (leaf, parents) = segments.split_last()?;

        let mut current = self;
        for segment in parents {
            current = current.child_mut(segment)?;
        }

        match current {
            ConfigValue::Object(map) => map.remove(leaf),
            ConfigValue::Array(items) => {
                let idx = leaf.parse::<usize>().ok().filter(|i| *i < items.len())?;
                Some(items.remove(idx))
            }
            _ => None,
        }
    }

    // ========================================================================
    // Fallible Typed Reads
    // ========================================================================

    /// String at `path`, or `default` when absent or not a string
    pub fn str_or<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
        self.lookup(path).and_then(ConfigValue::as_str).unwrap_or(default)
    }

    /// Non-blank string at `path`, or `default`
    pub fn text_or<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
        match self.lookup(path).and_then(ConfigValue::as_str) {
            Some(s) if !s.trim().is_empty() => s,
            _ => default,
        }
    }

    /// Boolean at `path`, or `default`
    pub fn bool_or(&self, path: &str, default: bool) -> bool {
        self.lookup(path).and_then(ConfigValue::as_bool).unwrap_or(default)
    }

    /// Integer at `path`, or `default`
    pub fn int_or(&self, path: &str, default: i64) -> i64 {
        self.lookup(path).and_then(ConfigValue::as_int).unwrap_or(default)
    }

    /// Array at `path`, or an empty slice
    pub fn items(&self, path: &str) -> &[ConfigValue] {
        self.lookup(path)
            .and_then(ConfigValue::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    fn child(&self, segment: &str) -> Option<&ConfigValue> {
        match self {
            ConfigValue::Object(map) => map.get(segment),
            ConfigValue::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    fn child_mut(&mut self, segment: &str) -> Option<&mut ConfigValue> {
        match self {
            ConfigValue::Object(map) => map.get_mut(segment),
            ConfigValue::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(move |i| items.get_mut(i)),
            _ => None,
        }
    }

    fn descend_or_create(
        &mut self,
        path: &ConfigPath,
        segment: &str,
    ) -> WeaveResult<&mut ConfigValue> {
        let conflict = |found: ValueKind| WeaveError::PathConflict {
            path: path.to_string(),
            segment: segment.to_string(),
            found: found.to_string(),
        };

        match self {
            ConfigValue::Object(map) => {
                let slot = map
                    .entry(segment.to_string())
                    .or_insert_with(ConfigValue::object);
                if slot.is_null() {
                    *slot = ConfigValue::object();
                }
                match slot.kind() {
                    ValueKind::Object | ValueKind::Array => Ok(slot),
                    found => Err(conflict(found)),
                }
            }
            ConfigValue::Array(items) => {
                let idx = segment
                    .parse::<usize>()
                    .map_err(|_| conflict(ValueKind::Array))?;
                let slot = items.get_mut(idx).ok_or_else(|| conflict(ValueKind::Array))?;
                if slot.is_null() {
                    *slot = ConfigValue::object();
                }
                Ok(slot)
            }
            other => Err(conflict(other.kind())),
        }
    }
}

impl Default for ConfigValue {
    fn default() -> Self {
        ConfigValue::Null
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => write!(f, ""),
            ConfigValue::Bool(v) => write!(f, "{}", v),
            ConfigValue::Int(v) => write!(f, "{}", v),
            ConfigValue::Float(v) => write!(f, "{}", v),
            ConfigValue::String(v) => write!(f, "{}", v),
            other => match serde_json::to_string(other) {
                Ok(json) => write!(f, "{}", json),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        ConfigValue::Bool(v)
    }
}

impl From<i32> for ConfigValue {
    fn from(v: i32) -> Self {
        ConfigValue::Int(v as i64)
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        ConfigValue::Int(v)
    }
}

impl From<u32> for ConfigValue {
    fn from(v: u32) -> Self {
        ConfigValue::Int(v as i64)
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        ConfigValue::Float(v)
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        ConfigValue::String(v)
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        ConfigValue::String(v.to_string())
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(v: Vec<T>) -> Self {
        ConfigValue::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(v: ConfigMap) -> Self {
        ConfigValue::Object(v)
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => ConfigValue::Null,
            serde_json::Value::Bool(b) => ConfigValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => ConfigValue::Int(i),
                None => ConfigValue::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => ConfigValue::String(s),
            serde_json::Value::Array(items) => {
                ConfigValue::Array(items.into_iter().map(ConfigValue::from).collect())
            }
            serde_json::Value::Object(map) => ConfigValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, ConfigValue::from(v)))
                    .collect(),
            ),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn path(s: &str) -> ConfigPath {
        ConfigPath::parse(s).unwrap()
    }

    fn sample() -> ConfigValue {
        serde_json::from_str(
            r#"{
                "title": "Orders",
                "layout": { "columns": 2, "spacing": "md" },
                "columns": [ { "id": "col1", "label": "Id" } ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_untagged_deserialize() {
        let value = sample();
        assert_eq!(value.kind(), ValueKind::Object);
        assert_eq!(value.lookup("layout.columns"), Some(&ConfigValue::Int(2)));
        assert_eq!(value.lookup("columns.0.label").and_then(|v| v.as_str()), Some("Id"));
    }

    #[test]
    fn test_set_path_creates_missing_levels() {
        let mut value = sample();
        let previous = value
            .set_path(&path("a.b.c"), ConfigValue::from("deep"))
            .unwrap();

        assert!(previous.is_none());
        assert_eq!(value.lookup("a.b.c"), Some(&ConfigValue::from("deep")));
        assert_eq!(value.lookup("title"), Some(&ConfigValue::from("Orders")));
        assert_eq!(value.lookup("layout.spacing"), Some(&ConfigValue::from("md")));
    }

    #[test]
    fn test_set_path_leaves_siblings_untouched() {
        let mut value = sample();
        let before_layout = value.lookup("layout").cloned().unwrap();

        value
            .set_path(&path("layout.alignment"), ConfigValue::from("center"))
            .unwrap();

        let layout = value.lookup("layout").and_then(|v| v.as_object()).unwrap();
        assert_eq!(layout.len(), 3);
        for (key, v) in before_layout.as_object().unwrap() {
            assert_eq!(layout.get(key), Some(v));
        }
    }

    #[test]
    fn test_set_path_replaces_and_returns_previous() {
        let mut value = sample();
        let previous = value
            .set_path(&path("layout.columns"), ConfigValue::Int(3))
            .unwrap();
        assert_eq!(previous, Some(ConfigValue::Int(2)));
        assert_eq!(value.int_or("layout.columns", 0), 3);
    }

    #[test]
    fn test_set_path_into_array_index() {
        let mut value = sample();
        value
            .set_path(&path("columns.0.label"), ConfigValue::from("Order Id"))
            .unwrap();
        assert_eq!(value.str_or("columns.0.label", ""), "Order Id");
        assert_eq!(value.str_or("columns.0.id", ""), "col1");

        value
            .set_path(&path("columns.1"), ConfigValue::from_pairs([("id", "col2")]))
            .unwrap();
        assert_eq!(value.items("columns").len(), 2);
    }

    #[test]
    fn test_set_path_replaces_null_intermediate() {
        let mut value = ConfigValue::from_pairs([("layout", ConfigValue::Null)]);
        value
            .set_path(&path("layout.width"), ConfigValue::from("full"))
            .unwrap();
        assert_eq!(value.str_or("layout.width", ""), "full");
    }

    #[test]
    fn test_set_path_conflict_on_leaf_intermediate() {
        let mut value = sample();
        let err = value
            .set_path(&path("title.text"), ConfigValue::from("x"))
            .unwrap_err();
        assert!(err.is_path());
        assert_eq!(value.str_or("title", ""), "Orders");
    }

    #[test]
    fn test_set_path_on_null_root() {
        let mut value = ConfigValue::Null;
        value.set_path(&path("x"), ConfigValue::Bool(true)).unwrap();
        assert!(value.bool_or("x", false));
    }

    #[test]
    fn test_remove_path() {
        let mut value = sample();
        assert_eq!(
            value.remove_path(&path("layout.spacing")),
            Some(ConfigValue::from("md"))
        );
        assert!(value.lookup("layout.spacing").is_none());
        assert!(value.remove_path(&path("missing.key")).is_none());
    }

    #[test]
    fn test_fallible_reads_use_defaults() {
        let value = sample();
        assert_eq!(value.str_or("subtitle", "none"), "none");
        assert_eq!(value.str_or("layout.columns", "none"), "none");
        assert_eq!(value.text_or("title", "Data Table"), "Orders");
        assert_eq!(value.int_or("pageSize", 10), 10);
        assert!(value.bool_or("pagination", true));
        assert!(value.items("rules").is_empty());
        assert!(value.lookup("a..b").is_none());
    }

    #[test]
    fn test_text_or_skips_blank() {
        let value = ConfigValue::from_pairs([("title", "  ")]);
        assert_eq!(value.text_or("title", "Form"), "Form");
    }

    #[test]
    fn test_typed_round_trip() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Layout {
            columns: u8,
        }

        let value = ConfigValue::from_serializable(&Layout { columns: 2 }).unwrap();
        assert_eq!(value.int_or("columns", 0), 2);
        let back: Layout = value.to_typed().unwrap();
        assert_eq!(back, Layout { columns: 2 });
    }

    #[test]
    fn test_int_float_distinction() {
        let value: ConfigValue = serde_json::from_str("[1, 1.5, 2.0]").unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items[0], ConfigValue::Int(1));
        assert_eq!(items[1], ConfigValue::Float(1.5));
        assert_eq!(items[2].as_int(), Some(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigValue::from("hi").to_string(), "hi");
        assert_eq!(ConfigValue::Null.to_string(), "");
        assert_eq!(ConfigValue::from(vec!["a", "b"]).to_string(), "[\"a\",\"b\"]");
    }
}
