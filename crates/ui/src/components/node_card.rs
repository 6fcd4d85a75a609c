//! # Node Card Component
//!
//! Visual representation of a workflow node on the canvas.
//!
//! The card displays:
//! - A header with the type glyph, the label and the type name
//! - The type-specific preview
//! - A target handle on the top edge and a source handle on the bottom edge
//!
//! Pressing on the card starts a drag; pressing the source handle starts a
//! connection and releasing over a target handle completes it.

use dioxus::prelude::*;
use weave_core::{Position, Size};
use weave_ir::{Node, NodePreview, color_for, glyph_for};

use crate::components::node_preview::NodePreviewView;
use crate::hooks::use_canvas::position_from_mouse_event;

// ============================================================================
// Node Card Component
// ============================================================================

/// Properties for the NodeCard component
#[derive(Props, Clone, PartialEq)]
pub struct NodeCardProps {
    pub node: Node,
    pub preview: NodePreview,
    #[props(default = false)]
    pub selected: bool,
    #[props(default = false)]
    pub dragging: bool,
    /// A connection is being drawn somewhere on the canvas
    #[props(default = false)]
    pub is_connecting: bool,
    /// Press on the card body, with screen coordinates
    #[props(default)]
    pub on_press: EventHandler<(String, Position)>,
    /// Press on the source handle
    #[props(default)]
    pub on_connect_start: EventHandler<String>,
    /// Release over the target handle
    #[props(default)]
    pub on_connect_end: EventHandler<String>,
}

/// A node on the canvas
#[component]
pub fn NodeCard(props: NodeCardProps) -> Element {
    let node = &props.node;
    let size = Size::node_card();
    let accent = color_for(&node.node_type);
    let glyph = glyph_for(&node.node_type);
    let type_name = node.node_type.display_name().to_string();
    let label = node.label().to_string();

    let mut classes = vec!["node-card"];
    if props.selected {
        classes.push("node-card-selected");
    }
    if props.dragging {
        classes.push("node-card-dragging");
    }
    let class = classes.join(" ");

    let on_press = props.on_press;
    let on_connect_start = props.on_connect_start;
    let on_connect_end = props.on_connect_end;
    let press_id = node.id.clone();
    let source_id = node.id.clone();
    let target_id = node.id.clone();

    rsx! {
        div {
            class: "{class}",
            style: "left: {node.position.x}px; top: {node.position.y}px; width: {size.width}px; min-height: {size.height}px; border-top-color: {accent};",

            onmousedown: move |e| {
                e.stop_propagation();
                on_press.call((press_id.clone(), position_from_mouse_event(&e)));
            },

            // Target handle
            div {
                class: if props.is_connecting { "node-handle node-handle-target node-handle-active" } else { "node-handle node-handle-target" },
                title: "Connect here",
                onmouseup: move |e| {
                    e.stop_propagation();
                    on_connect_end.call(target_id.clone());
                },
            }

            // Header
            div {
                class: "node-header",
                span { class: "node-glyph", style: "color: {accent};", "{glyph}" }
                span { class: "node-label", "{label}" }
                span { class: "node-type", "{type_name}" }
            }

            NodePreviewView { preview: props.preview.clone() }

            // Source handle
            div {
                class: "node-handle node-handle-source",
                title: "Drag to connect",
                onmousedown: move |e| {
                    e.stop_propagation();
                    on_connect_start.call(source_id.clone());
                },
            }
        }
    }
}
