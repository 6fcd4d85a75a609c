//! Directed connections between nodes

use serde::{Deserialize, Serialize};
use std::fmt;
use weave_core::{ConfigMap, EdgeId, NodeId};

/// Rendering style of an edge
///
/// Unrecognised styles are kept verbatim in [`EdgeType::Other`] so imported
/// files survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EdgeType {
    Default,
    Straight,
    Step,
    SmoothStep,
    Bezier,
    Other(String),
}

impl EdgeType {
    /// Serialized name, e.g. `smoothstep`
    pub fn as_str(&self) -> &str {
        match self {
            EdgeType::Default => "default",
            EdgeType::Straight => "straight",
            EdgeType::Step => "step",
            EdgeType::SmoothStep => "smoothstep",
            EdgeType::Bezier => "bezier",
            EdgeType::Other(raw) => raw,
        }
    }
}

impl From<String> for EdgeType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "default" => EdgeType::Default,
            "straight" => EdgeType::Straight,
            "step" => EdgeType::Step,
            "smoothstep" => EdgeType::SmoothStep,
            "bezier" => EdgeType::Bezier,
            _ => EdgeType::Other(raw),
        }
    }
}

impl From<EdgeType> for String {
    fn from(edge_type: EdgeType) -> Self {
        edge_type.as_str().to_string()
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional annotation carried by an edge
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    /// Any other keys, kept as read
    #[serde(flatten)]
    pub extra: ConfigMap,
}

/// A directed edge from `source` to `target`
///
/// Nothing guarantees that either endpoint exists in the graph; see
/// [`WorkflowGraph::dangling_edges`](crate::WorkflowGraph::dangling_edges).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub edge_type: Option<EdgeType>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub animated: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EdgeData>,

    /// Keys this model does not interpret (`style`, `markerEnd`, ...),
    /// kept as read
    #[serde(flatten)]
    pub extra: ConfigMap,
}

impl Edge {
    /// Create a plain edge
    pub fn new(id: impl Into<EdgeId>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
            edge_type: None,
            animated: false,
            data: None,
            extra: ConfigMap::new(),
        }
    }

    /// Whether the edge touches the given node on either end
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }

    /// Whether the edge starts and ends on the same node
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A completed connect gesture, before it becomes an edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub source: NodeId,
    pub target: NodeId,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

impl Connection {
    /// Connection between the default handles of two nodes
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
        }
    }

    /// Edge id derived from the endpoints and handles,
    /// e.g. `xy-edge__tableNode-1-formNode-2`
    pub fn edge_id(&self) -> EdgeId {
        format!(
            "xy-edge__{}{}-{}{}",
            self.source,
            self.source_handle.as_deref().unwrap_or(""),
            self.target,
            self.target_handle.as_deref().unwrap_or("")
        )
    }

    /// Turn the connection into an edge with the given id
    pub fn into_edge(self, id: EdgeId) -> Edge {
        Edge {
            id,
            source: self.source,
            target: self.target,
            source_handle: self.source_handle,
            target_handle: self.target_handle,
            edge_type: None,
            animated: false,
            data: None,
            extra: ConfigMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_edge_json() {
        let edge = Edge::new("e1", "a", "b");
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "e1", "source": "a", "target": "b" })
        );
    }

    #[test]
    fn test_edge_optional_fields_round_trip() {
        let raw = r#"{
            "id": "e2", "source": "a", "target": "b",
            "sourceHandle": "out", "type": "smoothstep", "animated": true,
            "data": { "label": "on submit" }
        }"#;
        let edge: Edge = serde_json::from_str(raw).unwrap();
        assert_eq!(edge.source_handle.as_deref(), Some("out"));
        assert_eq!(edge.edge_type, Some(EdgeType::SmoothStep));
        assert!(edge.animated);

        let back: Edge = serde_json::from_value(serde_json::to_value(&edge).unwrap()).unwrap();
        assert_eq!(back, edge);
    }

    #[test]
    fn test_unknown_type_and_keys_survive() {
        let raw = r#"{
            "id": "e3", "source": "a", "target": "b",
            "type": "simplebezier", "label": "next",
            "style": { "stroke": "red" }, "markerEnd": { "type": "arrowclosed" },
            "data": { "label": "go", "weight": 2 }
        }"#;
        let edge: Edge = serde_json::from_str(raw).unwrap();
        assert_eq!(edge.edge_type, Some(EdgeType::Other("simplebezier".to_string())));
        assert_eq!(edge.extra.get("label"), Some(&weave_core::ConfigValue::from("next")));
        assert!(edge.extra.contains_key("style"));
        assert!(edge.extra.contains_key("markerEnd"));
        let data = edge.data.as_ref().unwrap();
        assert_eq!(data.label.as_deref(), Some("go"));
        assert_eq!(data.extra.get("weight"), Some(&weave_core::ConfigValue::Int(2)));

        let written = serde_json::to_value(&edge).unwrap();
        let expected: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(written, expected);
    }

    #[test]
    fn test_connection_edge_id() {
        let mut conn = Connection::new("tableNode-1", "formNode-2");
        assert_eq!(conn.edge_id(), "xy-edge__tableNode-1-formNode-2");
        conn.source_handle = Some("bottom".to_string());
        assert_eq!(conn.edge_id(), "xy-edge__tableNode-1bottom-formNode-2");
    }

    #[test]
    fn test_touches_and_self_loop() {
        let edge = Edge::new("e", "a", "a");
        assert!(edge.touches("a"));
        assert!(!edge.touches("b"));
        assert!(edge.is_self_loop());
    }
}
