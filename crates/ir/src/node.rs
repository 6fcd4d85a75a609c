//! Workflow nodes
//!
//! A node is a positioned, typed unit of the workflow graph. Its data is a
//! mapping with at least a `label` and a `config` object; every read and
//! write of that mapping goes through [`ConfigPath`].

use serde::{Deserialize, Serialize};
use std::fmt;
use weave_core::{
    ConfigMap, ConfigPath, ConfigValue, NodeId, Position, Positioned, Rect, Size, WeaveResult,
};

// ============================================================================
// NodeType
// ============================================================================

/// The kind of a node. Serialized as the identifiers used in workflow
/// files (`tableNode`, `formNode`, ...). Unrecognised identifiers from
/// imported files are kept in [`NodeType::Other`] so they round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    Table,
    Form,
    FormGroup,
    Display,
    Action,
    Permission,
    Other(String),
}

impl NodeType {
    /// The six node types offered by the palette, in palette order
    pub const BUILTIN: [NodeType; 6] = [
        NodeType::Table,
        NodeType::Form,
        NodeType::FormGroup,
        NodeType::Display,
        NodeType::Action,
        NodeType::Permission,
    ];

    /// Identifier used in workflow files and generated node ids
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Table => "tableNode",
            NodeType::Form => "formNode",
            NodeType::FormGroup => "formGroupNode",
            NodeType::Display => "displayNode",
            NodeType::Action => "actionNode",
            NodeType::Permission => "permissionNode",
            NodeType::Other(raw) => raw,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &str {
        match self {
            NodeType::Table => "Table",
            NodeType::Form => "Form",
            NodeType::FormGroup => "Form Group",
            NodeType::Display => "Display",
            NodeType::Action => "Action",
            NodeType::Permission => "Permission",
            NodeType::Other(raw) => raw,
        }
    }

    /// Whether this is one of the six known node types
    pub fn is_builtin(&self) -> bool {
        !matches!(self, NodeType::Other(_))
    }
}

impl From<String> for NodeType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "tableNode" => NodeType::Table,
            "formNode" => NodeType::Form,
            "formGroupNode" => NodeType::FormGroup,
            "displayNode" => NodeType::Display,
            "actionNode" => NodeType::Action,
            "permissionNode" => NodeType::Permission,
            _ => NodeType::Other(raw),
        }
    }
}

impl From<&str> for NodeType {
    fn from(raw: &str) -> Self {
        NodeType::from(raw.to_string())
    }
}

impl From<NodeType> for String {
    fn from(node_type: NodeType) -> Self {
        node_type.as_str().to_string()
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// NodeData
// ============================================================================

static NULL: ConfigValue = ConfigValue::Null;

/// The data mapping carried by a node
///
/// Always an object at the root. Keys other than `label` and `config`
/// (for example `description` or `metadata` in imported files) are kept
/// as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigMap", into = "ConfigMap")]
pub struct NodeData {
    root: ConfigValue,
}

impl NodeData {
    /// Create node data with a label and a config object
    pub fn new(label: impl Into<String>, config: ConfigValue) -> Self {
        Self {
            root: ConfigValue::from_pairs([
                ("label", ConfigValue::from(label.into())),
                ("config", config),
            ]),
        }
    }

    /// The node label, empty when missing or not a string
    pub fn label(&self) -> &str {
        self.root.str_or("label", "")
    }

    /// Replace the label
    pub fn set_label(&mut self, label: impl Into<String>) {
        if let ConfigValue::Object(map) = &mut self.root {
            map.insert("label".to_string(), ConfigValue::from(label.into()));
        }
    }

    /// The config object, `Null` when missing
    pub fn config(&self) -> &ConfigValue {
        self.root.lookup("config").unwrap_or(&NULL)
    }

    /// The whole data mapping as a value
    pub fn as_value(&self) -> &ConfigValue {
        &self.root
    }

    /// Read the value at a dotted path (e.g. `config.layout.columns`)
    pub fn get(&self, path: &ConfigPath) -> Option<&ConfigValue> {
        self.root.get_path(path)
    }

    /// Read the value at a dotted path string; malformed paths read as absent
    pub fn lookup(&self, path: &str) -> Option<&ConfigValue> {
        self.root.lookup(path)
    }

    /// Assign `value` at `path`, creating missing mapping levels.
    ///
    /// Any path and any value kind are accepted. Use
    /// [`WorkflowGraph::check_node_data`](crate::WorkflowGraph::check_node_data)
    /// to compare a value with the editor schema.
    pub fn set(&mut self, path: &ConfigPath, value: ConfigValue) -> WeaveResult<Option<ConfigValue>> {
        self.root.set_path(path, value)
    }
}

impl Default for NodeData {
    fn default() -> Self {
        Self::new("", ConfigValue::object())
    }
}

impl From<ConfigMap> for NodeData {
    fn from(map: ConfigMap) -> Self {
        Self {
            root: ConfigValue::Object(map),
        }
    }
}

impl From<NodeData> for ConfigMap {
    fn from(data: NodeData) -> Self {
        match data.root {
            ConfigValue::Object(map) => map,
            _ => ConfigMap::new(),
        }
    }
}

// ============================================================================
// Node
// ============================================================================

/// A node on the workflow canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier, immutable after creation
    pub id: NodeId,

    /// Node kind, immutable after creation
    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Top-left corner in canvas coordinates
    #[serde(default)]
    pub position: Position,

    /// Label, config and any extra keys
    #[serde(default)]
    pub data: NodeData,
}

impl Node {
    /// Create a node
    pub fn new(
        id: impl Into<NodeId>,
        node_type: NodeType,
        position: Position,
        data: NodeData,
    ) -> Self {
        Self {
            id: id.into(),
            node_type,
            position,
            data,
        }
    }

    /// The node label
    pub fn label(&self) -> &str {
        self.data.label()
    }

    /// The node config object
    pub fn config(&self) -> &ConfigValue {
        self.data.config()
    }

    /// Canvas footprint of the node card
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, Size::node_card())
    }
}

impl Positioned for Node {
    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
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
    fn test_node_type_identifiers() {
        assert_eq!(NodeType::Table.as_str(), "tableNode");
        assert_eq!(NodeType::FormGroup.as_str(), "formGroupNode");
        assert_eq!(NodeType::from("permissionNode"), NodeType::Permission);
        assert_eq!(NodeType::FormGroup.display_name(), "Form Group");

        let custom = NodeType::from("chartNode");
        assert_eq!(custom, NodeType::Other("chartNode".to_string()));
        assert!(!custom.is_builtin());
        assert_eq!(custom.as_str(), "chartNode");
    }

    #[test]
    fn test_node_type_serde() {
        let json = serde_json::to_string(&NodeType::Display).unwrap();
        assert_eq!(json, "\"displayNode\"");
        let parsed: NodeType = serde_json::from_str("\"actionNode\"").unwrap();
        assert_eq!(parsed, NodeType::Action);
    }

    #[test]
    fn test_node_json_shape() {
        let node = Node::new(
            "tableNode-1",
            NodeType::Table,
            Position::new(10.0, 20.0),
            NodeData::new("Customers", ConfigValue::from_pairs([("title", "All")])),
        );

        let value: serde_json::Value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["id"], "tableNode-1");
        assert_eq!(value["type"], "tableNode");
        assert_eq!(value["position"]["x"], 10.0);
        assert_eq!(value["data"]["label"], "Customers");
        assert_eq!(value["data"]["config"]["title"], "All");
    }

    #[test]
    fn test_node_data_keeps_extra_keys() {
        let node: Node = serde_json::from_str(
            r#"{
                "id": "n1",
                "type": "formNode",
                "position": { "x": 1, "y": 2 },
                "data": { "label": "Signup", "description": "first step", "config": {} }
            }"#,
        )
        .unwrap();

        assert_eq!(node.label(), "Signup");
        assert_eq!(
            node.data.lookup("description").and_then(|v| v.as_str()),
            Some("first step")
        );

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["data"]["description"], "first step");
    }

    #[test]
    fn test_node_lenient_import() {
        let node: Node = serde_json::from_str(r#"{ "id": "x", "type": "mysteryNode" }"#).unwrap();
        assert_eq!(node.position, Position::zero());
        assert_eq!(node.label(), "");
        assert!(node.config().is_object());
        assert_eq!(node.node_type.as_str(), "mysteryNode");
    }

    #[test]
    fn test_node_data_set_creates_levels() {
        let mut data = NodeData::new("Form", ConfigValue::from_pairs([("title", "Signup")]));
        let path = ConfigPath::parse("config.layout.columns").unwrap();
        data.set(&path, ConfigValue::Int(2)).unwrap();

        assert_eq!(data.get(&path), Some(&ConfigValue::Int(2)));
        assert_eq!(data.config().str_or("title", ""), "Signup");
        assert_eq!(data.label(), "Form");
    }

    #[test]
    fn test_node_data_label_fallback() {
        let mut data = NodeData::default();
        let path = ConfigPath::parse("label").unwrap();
        data.set(&path, ConfigValue::Int(5)).unwrap();
        assert_eq!(data.label(), "");

        data.set_label("Renamed");
        assert_eq!(data.label(), "Renamed");
    }

    #[test]
    fn test_positioned_node() {
        let mut node = Node::new("a", NodeType::Action, Position::zero(), NodeData::default());
        node.translate(5.0, 7.0);
        assert_eq!(node.position(), Position::new(5.0, 7.0));
        assert_eq!(node.bounds().position, Position::new(5.0, 7.0));
    }
}
