//! # Connection Components
//!
//! SVG rendering of workflow edges. Edges leave a node from the source
//! handle at the bottom of its card and enter the target through the handle
//! at the top. Edges whose endpoints are missing (e.g. after a delete) have
//! no geometry and are not drawn.
//!
//! The layer lives inside the canvas transform, so every coordinate here is
//! a canvas coordinate.

use dioxus::prelude::*;
use weave_core::Position;
use weave_ir::{Edge, EdgeType, WorkflowGraph};

// ============================================================================
// Constants
// ============================================================================

/// Edge stroke colour
pub const EDGE_COLOR: &str = "#94a3b8";

/// Colour of the edge being drawn
pub const PREVIEW_COLOR: &str = "#6366f1";

/// Control point distance as a fraction of the endpoint distance
const BEZIER_CONTROL_OFFSET: f64 = 0.4;

/// Minimum control point distance
const MIN_CONTROL_DISTANCE: f64 = 40.0;

// ============================================================================
// Geometry
// ============================================================================

/// Screen-independent geometry of one edge
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeGeometry {
    pub start: Position,
    pub end: Position,
    pub path: String,
}

impl EdgeGeometry {
    /// Midpoint between the endpoints, where labels go
    pub fn midpoint(&self) -> Position {
        Position::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }
}

/// Geometry of an edge, `None` when either endpoint is missing
pub fn edge_geometry(graph: &WorkflowGraph, edge: &Edge) -> Option<EdgeGeometry> {
    let start = graph.node(&edge.source)?.bounds().bottom_center();
    let end = graph.node(&edge.target)?.bounds().top_center();
    let path = match edge.edge_type {
        Some(EdgeType::Straight) => straight_path(start, end),
        Some(EdgeType::Step) | Some(EdgeType::SmoothStep) => step_path(start, end),
        _ => bezier_path(start, end),
    };
    Some(EdgeGeometry { start, end, path })
}

/// Vertical bezier curve from a bottom handle to a top handle
pub fn bezier_path(start: Position, end: Position) -> String {
    let distance = ((end.x - start.x).powi(2) + (end.y - start.y).powi(2)).sqrt();
    let offset = (distance * BEZIER_CONTROL_OFFSET).max(MIN_CONTROL_DISTANCE);
    format!(
        "M {},{} C {},{} {},{} {},{}",
        start.x,
        start.y,
        start.x,
        start.y + offset,
        end.x,
        end.y - offset,
        end.x,
        end.y
    )
}

/// Straight segment
pub fn straight_path(start: Position, end: Position) -> String {
    format!("M {},{} L {},{}", start.x, start.y, end.x, end.y)
}

/// Orthogonal path that turns halfway down
pub fn step_path(start: Position, end: Position) -> String {
    let mid_y = (start.y + end.y) / 2.0;
    format!(
        "M {},{} L {},{} L {},{} L {},{}",
        start.x, start.y, start.x, mid_y, end.x, mid_y, end.x, end.y
    )
}

// ============================================================================
// Edges Layer
// ============================================================================

/// Properties for EdgesLayer
#[derive(Props, Clone, PartialEq)]
pub struct EdgesLayerProps {
    pub graph: WorkflowGraph,
    /// Source node of the connection being drawn
    #[props(default)]
    pub connecting_from: Option<String>,
    /// Pointer position in canvas coordinates
    pub pointer: Position,
}

/// Every drawable edge plus the in-progress connection
#[component]
pub fn EdgesLayer(props: EdgesLayerProps) -> Element {
    let drawn: Vec<(String, EdgeGeometry, Option<String>, bool)> = props
        .graph
        .edges
        .iter()
        .filter_map(|edge| {
            let geometry = edge_geometry(&props.graph, edge)?;
            let label = edge.data.as_ref().and_then(|d| d.label.clone());
            Some((edge.id.clone(), geometry, label, edge.animated))
        })
        .collect();

    let preview = props
        .connecting_from
        .as_deref()
        .and_then(|id| props.graph.node(id))
        .map(|node| bezier_path(node.bounds().bottom_center(), props.pointer));

    rsx! {
        svg {
            class: "edges-layer",
            xmlns: "http://www.w3.org/2000/svg",

            defs {
                marker {
                    id: "edge-arrow",
                    view_box: "0 0 10 10",
                    ref_x: "9",
                    ref_y: "5",
                    marker_width: "8",
                    marker_height: "8",
                    orient: "auto-start-reverse",
                    path { d: "M 0 0 L 10 5 L 0 10 z", fill: EDGE_COLOR }
                }
            }

            for (id, geometry, label, animated) in drawn {
                g {
                    key: "{id}",
                    path {
                        class: if animated { "edge-path edge-animated" } else { "edge-path" },
                        d: "{geometry.path}",
                        fill: "none",
                        stroke: EDGE_COLOR,
                        stroke_width: "2",
                        marker_end: "url(#edge-arrow)",
                    }
                    if let Some(text) = label {
                        {
                            let mid = geometry.midpoint();
                            rsx! {
                                text {
                                    class: "edge-label",
                                    x: "{mid.x}",
                                    y: "{mid.y}",
                                    text_anchor: "middle",
                                    "{text}"
                                }
                            }
                        }
                    }
                }
            }

            if let Some(d) = preview {
                path {
                    class: "edge-preview",
                    d: "{d}",
                    fill: "none",
                    stroke: PREVIEW_COLOR,
                    stroke_width: "2",
                    stroke_dasharray: "6 4",
                }
            }
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
    use weave_ir::NodeType;

    #[test]
    fn test_edge_geometry_uses_handles() {
        let mut graph = WorkflowGraph::new();
        let a = graph.add_node_at(NodeType::Table, Position::new(0.0, 0.0)).unwrap();
        let b = graph.add_node_at(NodeType::Form, Position::new(0.0, 400.0)).unwrap();
        graph.insert_edge(Edge::new("e", a.as_str(), b.as_str()));

        let geometry = edge_geometry(&graph, &graph.edges[0]).unwrap();
        assert_eq!(geometry.start, Position::new(140.0, 200.0));
        assert_eq!(geometry.end, Position::new(140.0, 400.0));
        assert!(geometry.path.starts_with("M 140,200 C"));
        assert_eq!(geometry.midpoint(), Position::new(140.0, 300.0));
    }

    #[test]
    fn test_dangling_edge_has_no_geometry() {
        let mut graph = WorkflowGraph::new();
        let a = graph.add_node(NodeType::Table).unwrap();
        graph.insert_edge(Edge::new("e", a.as_str(), "gone"));
        assert!(edge_geometry(&graph, &graph.edges[0]).is_none());
    }

    #[test]
    fn test_path_shapes() {
        let start = Position::new(0.0, 0.0);
        let end = Position::new(100.0, 100.0);
        assert_eq!(straight_path(start, end), "M 0,0 L 100,100");
        assert_eq!(step_path(start, end), "M 0,0 L 0,50 L 100,50 L 100,100");
    }
}
