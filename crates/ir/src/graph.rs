//! The workflow graph
//!
//! `WorkflowGraph` owns the node and edge lists and brokers every structural
//! change: adding nodes from palette templates, connecting, deleting, moving,
//! editing node data and replacing the whole graph on import.

use crate::config::{default_node_data, sample_table_data};
use crate::edge::{Connection, Edge};
use crate::node::{Node, NodeType};
use crate::palette::SPAWN_RANGE;
use crate::schema::EditorSchema;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};
use uuid::Uuid;
use weave_core::{
    ConfigPath, ConfigValue, EdgeId, NodeId, Position, Positioned, Rect, WeaveError, WeaveResult,
};

/// Id of the sample node present when the builder opens
pub const SAMPLE_NODE_ID: &str = "1";

// ============================================================================
// WorkflowGraph
// ============================================================================

/// Nodes and edges of one workflow
///
/// List order is insertion order and carries no meaning beyond draw order.
/// Serializes to exactly `{ "nodes": [...], "edges": [...] }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowGraph {
    #[serde(default)]
    pub nodes: Vec<Node>,

    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl WorkflowGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph holding the sample table shown when the builder opens
    pub fn with_sample() -> WeaveResult<Self> {
        let mut graph = Self::new();
        graph.insert_node(Node::new(
            SAMPLE_NODE_ID,
            NodeType::Table,
            Position::new(100.0, 100.0),
            sample_table_data()?,
        ));
        Ok(graph)
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    /// Instantiate the template for `node_type` at a random position in
    /// `[0, 400)` on both axes. The id is `{type}-{unix millis}`, with a
    /// numeric suffix if that id is already taken.
    pub fn add_node(&mut self, node_type: NodeType) -> WeaveResult<NodeId> {
        self.add_node_at(node_type, random_spawn_position())
    }

    /// Instantiate the template for `node_type` at `position`
    pub fn add_node_at(&mut self, node_type: NodeType, position: Position) -> WeaveResult<NodeId> {
        let id = self.fresh_node_id(&node_type, Utc::now().timestamp_millis());
        let data = default_node_data(&node_type)?;
        debug!("Adding {} node '{}' at ({:.0}, {:.0})", node_type, id, position.x, position.y);
        self.nodes.push(Node::new(id.clone(), node_type, position, data));
        Ok(id)
    }

    /// Append a node as-is, without any id check
    pub fn insert_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Get a node by id; the first match when ids repeat
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get a mutable node by id; the first match when ids repeat
    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Whether a node with this id exists
    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Remove every node with this id, returning the first one removed.
    ///
    /// Imported files may repeat an id; all copies go. Edges are left
    /// untouched, including those attached to the removed node. Use
    /// [`prune_dangling_edges`](Self::prune_dangling_edges) to drop them.
    pub fn remove_node(&mut self, id: &str) -> Option<Node> {
        let index = self.nodes.iter().position(|n| n.id == id)?;
        let node = self.nodes.remove(index);
        self.nodes.retain(|n| n.id != id);
        debug!("Removed node '{}'", id);
        Some(node)
    }

    /// Move every node with this id to an absolute position.
    ///
    /// Non-finite coordinates are rejected since JSON cannot carry them.
    pub fn set_node_position(&mut self, id: &str, position: Position) -> WeaveResult<()> {
        ensure_finite(id, position)?;
        self.each_node_mut(id, |node| {
            node.set_position(position);
            Ok(())
        })
    }

    /// Move every node with this id by a delta
    pub fn move_node(&mut self, id: &str, dx: f64, dy: f64) -> WeaveResult<()> {
        let current = self
            .node(id)
            .ok_or_else(|| WeaveError::NodeNotFound(id.to_string()))?
            .position;
        ensure_finite(id, current.offset(dx, dy))?;
        self.each_node_mut(id, |node| {
            node.translate(dx, dy);
            Ok(())
        })
    }

    /// Topmost node whose card contains `point`
    pub fn node_at(&self, point: Position) -> Option<&Node> {
        self.nodes.iter().rev().find(|n| n.bounds().contains(point))
    }

    // ========================================================================
    // Node data
    // ========================================================================

    /// Write `value` at a dotted `path` of a node's data.
    ///
    /// Any path and any value kind are accepted: missing intermediate levels
    /// are created and siblings are left as they are. Every node sharing the
    /// id is updated. Fails only for a malformed path, an unknown node, or a
    /// path that runs through a scalar.
    pub fn update_node_data(&mut self, id: &str, path: &str, value: ConfigValue) -> WeaveResult<()> {
        let path = ConfigPath::parse(path)?;
        self.each_node_mut(id, |node| {
            node.data.set(&path, value.clone())?;
            Ok(())
        })?;
        debug!("Updated '{}' on node '{}'", path, id);
        Ok(())
    }

    /// Check a value against the editor schema of a node's type without
    /// writing it. Undeclared paths, wrong kinds and rule violations are
    /// reported as errors.
    pub fn check_node_data(&self, id: &str, path: &str, value: &ConfigValue) -> WeaveResult<()> {
        let path = ConfigPath::parse(path)?;
        let node = self
            .node(id)
            .ok_or_else(|| WeaveError::NodeNotFound(id.to_string()))?;
        EditorSchema::for_type(&node.node_type).check(id, &path, value)
    }

    /// Rename a node
    pub fn rename_node(&mut self, id: &str, label: impl Into<String>) -> WeaveResult<()> {
        self.update_node_data(id, "label", ConfigValue::from(label.into()))
    }

    // ========================================================================
    // Edges
    // ========================================================================

    /// Append an edge for a completed connect gesture.
    ///
    /// Self loops and repeated connections are accepted. Repeats get a
    /// numeric suffix so edge ids stay unique.
    pub fn connect(&mut self, connection: Connection) -> EdgeId {
        let base = connection.edge_id();
        let id = self.unique_edge_id(base);
        debug!("Connecting '{}' -> '{}' as '{}'", connection.source, connection.target, id);
        self.edges.push(connection.into_edge(id.clone()));
        id
    }

    /// Append an edge as-is
    pub fn insert_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Get an edge by id
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Remove an edge by id
    pub fn remove_edge(&mut self, id: &str) -> Option<Edge> {
        let index = self.edges.iter().position(|e| e.id == id)?;
        Some(self.edges.remove(index))
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges starting or ending at a node
    pub fn edges_for_node(&self, id: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.touches(id)).collect()
    }

    /// Edges whose source or target is not a node of this graph
    pub fn dangling_edges(&self) -> Vec<&Edge> {
        let ids = self.node_ids();
        self.edges
            .iter()
            .filter(|e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
            .collect()
    }

    /// Drop every dangling edge, returning how many were removed
    pub fn prune_dangling_edges(&mut self) -> usize {
        let ids: HashSet<String> = self.nodes.iter().map(|n| n.id.clone()).collect();
        let before = self.edges.len();
        self.edges
            .retain(|e| ids.contains(&e.source) && ids.contains(&e.target));
        let removed = before - self.edges.len();
        if removed > 0 {
            info!("Pruned {} dangling edge(s)", removed);
        }
        removed
    }

    // ========================================================================
    // Whole graph
    // ========================================================================

    /// Replace all nodes and edges. No merge and no checks.
    pub fn replace(&mut self, other: WorkflowGraph) {
        *self = other;
    }

    /// Remove all nodes and edges
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Whether the graph has no nodes and no edges
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Bounding box of all node cards
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.nodes.iter().map(Node::bounds))
    }

    /// "Nodes: N | Edges: M"
    pub fn summary(&self) -> String {
        format!("Nodes: {} | Edges: {}", self.nodes.len(), self.edges.len())
    }

    fn each_node_mut<F>(&mut self, id: &str, mut apply: F) -> WeaveResult<()>
    where
        F: FnMut(&mut Node) -> WeaveResult<()>,
    {
        let mut found = false;
        for node in self.nodes.iter_mut().filter(|n| n.id == id) {
            apply(node)?;
            found = true;
        }
        if found {
            Ok(())
        } else {
            Err(WeaveError::NodeNotFound(id.to_string()))
        }
    }

    fn node_ids(&self) -> HashSet<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    fn fresh_node_id(&self, node_type: &NodeType, millis: i64) -> NodeId {
        let base = format!("{}-{}", node_type, millis);
        let mut candidate = base.clone();
        let mut suffix = 0;
        while self.contains_node(&candidate) {
            suffix += 1;
            candidate = format!("{}-{}", base, suffix);
        }
        candidate
    }

    fn unique_edge_id(&self, base: EdgeId) -> EdgeId {
        let mut candidate = base.clone();
        let mut suffix = 0;
        while self.edge(&candidate).is_some() {
            suffix += 1;
            candidate = format!("{}-{}", base, suffix);
        }
        candidate
    }
}

/// Random point in `[0, SPAWN_RANGE)` on both axes.
///
/// Uses 48 bits from each half of a v4 uuid, skipping the fixed version and
/// variant bits.
fn random_spawn_position() -> Position {
    const MASK: u128 = (1 << 48) - 1;
    let bits = Uuid::new_v4().as_u128();
    let unit = |word: u128| (word & MASK) as f64 / (1u64 << 48) as f64;
    Position::new(unit(bits >> 80) * SPAWN_RANGE, unit(bits) * SPAWN_RANGE)
}

fn ensure_finite(id: &str, position: Position) -> WeaveResult<()> {
    if position.x.is_finite() && position.y.is_finite() {
        Ok(())
    } else {
        Err(WeaveError::validation(format!(
            "position of node '{}' must be finite, got ({}, {})",
            id, position.x, position.y
        )))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeData;
    use pretty_assertions::assert_eq;

    fn node(id: &str, node_type: NodeType) -> Node {
        Node::new(id, node_type, Position::zero(), NodeData::default())
    }

    #[test]
    fn test_add_node_from_each_template() {
        let mut graph = WorkflowGraph::new();
        for node_type in NodeType::BUILTIN.iter() {
            let id = graph.add_node(node_type.clone()).unwrap();
            let node = graph.node(&id).unwrap();

            assert!(id.starts_with(&format!("{}-", node_type)));
            assert_eq!(&node.node_type, node_type);
            assert!(node.position.x >= 0.0 && node.position.x < SPAWN_RANGE);
            assert!(node.position.y >= 0.0 && node.position.y < SPAWN_RANGE);
            assert!(node.config().is_object());
        }
        assert_eq!(graph.node_count(), 6);
    }

    #[test]
    fn test_fresh_ids_never_collide() {
        let mut graph = WorkflowGraph::new();
        let first = graph.fresh_node_id(&NodeType::Form, 42);
        assert_eq!(first, "formNode-42");
        graph.insert_node(node(&first, NodeType::Form));

        let second = graph.fresh_node_id(&NodeType::Form, 42);
        assert_eq!(second, "formNode-42-1");
        graph.insert_node(node(&second, NodeType::Form));
        assert_eq!(graph.fresh_node_id(&NodeType::Form, 42), "formNode-42-2");
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let mut graph = WorkflowGraph::new();
        let a = graph.add_node(NodeType::Action).unwrap();
        let b = graph.add_node(NodeType::Action).unwrap();
        let c = graph.add_node(NodeType::Action).unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_remove_node_leaves_edges_unchanged() {
        let mut graph = WorkflowGraph::new();
        graph.insert_node(node("a", NodeType::Table));
        graph.insert_node(node("b", NodeType::Form));
        graph.insert_node(node("c", NodeType::Display));
        graph.connect(Connection::new("a", "b"));
        graph.connect(Connection::new("b", "c"));
        let edges_before = serde_json::to_string(&graph.edges).unwrap();

        let removed = graph.remove_node("b").unwrap();
        assert_eq!(removed.id, "b");
        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(serde_json::to_string(&graph.edges).unwrap(), edges_before);
        assert_eq!(graph.dangling_edges().len(), 2);

        assert!(graph.remove_node("missing").is_none());
    }

    #[test]
    fn test_prune_dangling_edges() {
        let mut graph = WorkflowGraph::new();
        graph.insert_node(node("a", NodeType::Table));
        graph.insert_node(node("b", NodeType::Form));
        graph.connect(Connection::new("a", "b"));
        graph.connect(Connection::new("a", "ghost"));

        assert_eq!(graph.prune_dangling_edges(), 1);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.prune_dangling_edges(), 0);
    }

    #[test]
    fn test_connect_accepts_loops_and_repeats() {
        let mut graph = WorkflowGraph::new();
        graph.insert_node(node("a", NodeType::Action));
        graph.insert_node(node("b", NodeType::Form));

        let first = graph.connect(Connection::new("a", "b"));
        let repeat = graph.connect(Connection::new("a", "b"));
        let looped = graph.connect(Connection::new("a", "a"));

        assert_eq!(first, "xy-edge__a-b");
        assert_eq!(repeat, "xy-edge__a-b-1");
        assert!(graph.edge(&looped).unwrap().is_self_loop());
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edges_for_node("b").len(), 2);
    }

    #[test]
    fn test_update_node_data_accepts_any_path_and_kind() {
        let mut graph = WorkflowGraph::new();
        let id = graph.add_node(NodeType::Table).unwrap();

        graph
            .update_node_data(&id, "config.a.b.c", ConfigValue::from("v"))
            .unwrap();
        graph
            .update_node_data(&id, "config.pageSize", ConfigValue::from("abc"))
            .unwrap();

        let node = graph.node(&id).unwrap();
        assert_eq!(node.data.lookup("config.a.b.c"), Some(&ConfigValue::from("v")));
        assert_eq!(node.config().str_or("pageSize", ""), "abc");
        assert_eq!(node.config().str_or("title", ""), "New Table");
        assert!(!node.config().items("columns").is_empty());

        let err = graph
            .update_node_data("nope", "label", ConfigValue::from("x"))
            .unwrap_err();
        assert!(err.is_not_found());

        let err = graph.update_node_data(&id, "", ConfigValue::Null).unwrap_err();
        assert!(err.is_path());
    }

    #[test]
    fn test_check_node_data_reports_without_writing() {
        let mut graph = WorkflowGraph::new();
        let id = graph.add_node(NodeType::Form).unwrap();
        let before = graph.node(&id).unwrap().clone();

        assert!(graph
            .check_node_data(&id, "config.layout.columns", &ConfigValue::Int(2))
            .is_ok());
        assert!(matches!(
            graph.check_node_data(&id, "config.layout.gap", &ConfigValue::Int(2)),
            Err(WeaveError::UnknownField { .. })
        ));
        assert!(matches!(
            graph.check_node_data(&id, "config.title", &ConfigValue::Int(3)),
            Err(WeaveError::TypeMismatch { .. })
        ));
        assert!(graph
            .check_node_data("nope", "label", &ConfigValue::from("x"))
            .unwrap_err()
            .is_not_found());
        assert_eq!(graph.node(&id).unwrap(), &before);
    }

    #[test]
    fn test_non_finite_positions_rejected() {
        let mut graph = WorkflowGraph::new();
        let id = graph.add_node(NodeType::Display).unwrap();
        graph.set_node_position(&id, Position::new(10.0, 20.0)).unwrap();

        let err = graph
            .set_node_position(&id, Position::new(f64::NAN, 5.0))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(graph
            .set_node_position(&id, Position::new(0.0, f64::INFINITY))
            .is_err());
        assert!(graph.move_node(&id, f64::NEG_INFINITY, 0.0).is_err());
        assert_eq!(graph.node(&id).unwrap().position, Position::new(10.0, 20.0));
    }

    #[test]
    fn test_repeated_ids_are_handled_together() {
        let mut graph = WorkflowGraph::new();
        for x in [0.0, 50.0] {
            graph.insert_node(Node::new(
                "dup",
                NodeType::Action,
                Position::new(x, 0.0),
                default_node_data(&NodeType::Action).unwrap(),
            ));
        }
        graph.insert_edge(Edge::new("e1", "dup", "dup"));

        graph.rename_node("dup", "Both").unwrap();
        assert!(graph.nodes.iter().all(|n| n.label() == "Both"));

        graph.move_node("dup", 10.0, 0.0).unwrap();
        assert_eq!(graph.nodes[1].position, Position::new(60.0, 0.0));

        let removed = graph.remove_node("dup").unwrap();
        assert_eq!(removed.position, Position::new(10.0, 0.0));
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_rename_node() {
        let mut graph = WorkflowGraph::with_sample().unwrap();
        graph.rename_node(SAMPLE_NODE_ID, "Customers").unwrap();
        assert_eq!(graph.node(SAMPLE_NODE_ID).unwrap().label(), "Customers");
    }

    #[test]
    fn test_sample_graph() {
        let graph = WorkflowGraph::with_sample().unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        let sample = graph.node(SAMPLE_NODE_ID).unwrap();
        assert_eq!(sample.node_type, NodeType::Table);
        assert_eq!(sample.position, Position::new(100.0, 100.0));
        assert_eq!(sample.label(), "Sample Table");
    }

    #[test]
    fn test_positions() {
        let mut graph = WorkflowGraph::new();
        graph.insert_node(node("a", NodeType::Table));
        graph.set_node_position("a", Position::new(40.0, 60.0)).unwrap();
        graph.move_node("a", 10.0, -10.0).unwrap();
        assert_eq!(graph.node("a").unwrap().position, Position::new(50.0, 50.0));
        assert!(graph.set_node_position("zz", Position::zero()).is_err());

        assert_eq!(graph.node_at(Position::new(60.0, 60.0)).unwrap().id, "a");
        assert!(graph.node_at(Position::new(1000.0, 1000.0)).is_none());
    }

    #[test]
    fn test_replace_and_clear() {
        let mut graph = WorkflowGraph::with_sample().unwrap();
        let mut other = WorkflowGraph::new();
        other.insert_node(node("x", NodeType::Display));
        other.insert_edge(Edge::new("e", "x", "y"));

        graph.replace(other.clone());
        assert_eq!(graph, other);
        assert_eq!(graph.summary(), "Nodes: 1 | Edges: 1");

        graph.clear();
        assert!(graph.is_empty());
        assert!(graph.bounds().is_none());
    }

    #[test]
    fn test_spawn_position_range() {
        for _ in 0..200 {
            let p = random_spawn_position();
            assert!((0.0..SPAWN_RANGE).contains(&p.x));
            assert!((0.0..SPAWN_RANGE).contains(&p.y));
        }
    }
}
