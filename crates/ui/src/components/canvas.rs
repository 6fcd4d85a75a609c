//! # Canvas Component
//!
//! The main workflow canvas.
//!
//! ## Features
//!
//! - **Pan**: drag the background
//! - **Zoom**: mouse wheel, centered on the cursor, or the zoom controls
//! - **Grid**: dotted background that follows pan and zoom
//! - **Nodes**: node cards at their positions, draggable
//! - **Edges**: drawn from a source handle to a target handle
//! - **Minimap**: overview of every node
//! - **Drop**: palette templates dropped on the canvas become nodes

use dioxus::prelude::*;
use weave_core::{Position, Rect, Size};
use weave_ir::{NodePreview, color_for};

use crate::components::connection::EdgesLayer;
use crate::components::node_card::NodeCard;
use crate::hooks::use_canvas::{
    position_from_mouse_event, use_canvas_interactions, zoom_direction_from_wheel,
};
use crate::state::{APP_STATE, StatusLevel};

// ============================================================================
// Constants
// ============================================================================

/// Dot colour of the background grid
pub const GRID_DOT_COLOR: &str = "rgba(100, 116, 139, 0.45)";

/// Minimap width in pixels
pub const MINIMAP_WIDTH: f64 = 180.0;

/// Minimap height in pixels
pub const MINIMAP_HEIGHT: f64 = 120.0;

/// Viewport size assumed until the first resize event
const DEFAULT_VIEWPORT: (f64, f64) = (1000.0, 700.0);

// ============================================================================
// Canvas Component
// ============================================================================

/// Main canvas component
#[component]
pub fn Canvas() -> Element {
    let interactions = use_canvas_interactions();
    let mut viewport = use_signal(|| DEFAULT_VIEWPORT);

    let state = APP_STATE.read();
    let graph = state.graph.clone();
    let canvas = state.canvas.clone();
    let selected = state.selected.clone();
    drop(state);

    let previews: Vec<NodePreview> = graph
        .nodes
        .iter()
        .map(|node| NodePreview::build(node, &graph))
        .collect();
    let dragging_id = canvas.dragging.as_ref().map(|(id, _)| id.clone());
    let is_connecting = canvas.connecting_from.is_some();
    let summary = graph.summary();

    let transform_style = format!(
        "transform: translate({}px, {}px) scale({});",
        canvas.pan.x, canvas.pan.y, canvas.zoom
    );

    let cursor_class = if canvas.is_panning || dragging_id.is_some() {
        "cursor-grabbing"
    } else if is_connecting {
        "cursor-crosshair"
    } else {
        "cursor-default"
    };

    let handle_mouse_down = move |e: MouseEvent| {
        let mut state = APP_STATE.write();
        if state.canvas.connecting_from.is_some() {
            state.canvas.cancel_connection();
            return;
        }
        state.clear_selection();
        drop(state);
        interactions.start_pan(position_from_mouse_event(&e));
    };

    let handle_mouse_move = move |e: MouseEvent| {
        let pos = position_from_mouse_event(&e);
        APP_STATE.write().pointer_moved(pos);
        if interactions.is_panning() {
            interactions.update_pan(pos);
        }
    };

    // A pending connection survives the release; it ends on a target handle,
    // a background press or Escape.
    let handle_mouse_up = move |_e: MouseEvent| {
        APP_STATE.write().pointer_released();
        interactions.stop_pan();
    };

    let handle_wheel = move |e: WheelEvent| {
        e.prevent_default();
        let direction = zoom_direction_from_wheel(&e);
        if direction != 0.0 {
            let coords = e.client_coordinates();
            interactions.zoom_toward(direction, Position::new(coords.x, coords.y));
        }
    };

    let handle_drop = move |e: DragEvent| {
        e.prevent_default();
        let mut state = APP_STATE.write();
        let Some(node_type) = state.ui.palette_drag.take() else {
            return;
        };
        let coords = e.client_coordinates();
        if let Err(err) = state.drop_node(node_type, Position::new(coords.x, coords.y)) {
            tracing::error!("Failed to add dropped node: {}", err);
            state
                .ui
                .set_status(format!("Failed to add node: {}", err), StatusLevel::Error);
        }
    };

    let handle_key_down = move |e: KeyboardEvent| match e.key() {
        Key::Delete => {
            e.prevent_default();
            APP_STATE.write().delete_selected();
        }
        Key::Escape => {
            let mut state = APP_STATE.write();
            state.canvas.cancel_connection();
            state.clear_selection();
        }
        _ => {}
    };

    let (viewport_w, viewport_h) = *viewport.read();

    rsx! {
        div {
            class: "canvas-container {cursor_class}",
            tabindex: 0,

            onmousedown: handle_mouse_down,
            onmousemove: handle_mouse_move,
            onmouseup: handle_mouse_up,
            onmouseleave: move |_| {
                APP_STATE.write().pointer_released();
                interactions.stop_pan();
            },
            onwheel: handle_wheel,
            ondragover: move |e| e.prevent_default(),
            ondrop: handle_drop,
            onkeydown: handle_key_down,
            oncontextmenu: move |e| e.prevent_default(),
            onresize: move |e| {
                if let Ok(size) = e.get_content_box_size() {
                    viewport.set((size.width, size.height));
                }
            },

            if canvas.show_grid {
                CanvasGrid {
                    grid_size: canvas.grid_size,
                    pan: canvas.pan,
                    zoom: canvas.zoom,
                }
            }

            div {
                class: "canvas-transform-layer",
                style: "{transform_style}",

                EdgesLayer {
                    graph: graph.clone(),
                    connecting_from: canvas.connecting_from.clone(),
                    pointer: canvas.mouse_position,
                }

                for (node, preview) in graph.nodes.iter().zip(previews) {
                    NodeCard {
                        key: "{node.id}",
                        node: node.clone(),
                        preview,
                        selected: selected.as_deref() == Some(node.id.as_str()),
                        dragging: dragging_id.as_deref() == Some(node.id.as_str()),
                        is_connecting,
                        on_press: move |(id, pos): (String, Position)| {
                            APP_STATE.write().begin_drag(&id, pos);
                        },
                        on_connect_start: move |id: String| {
                            APP_STATE.write().canvas.start_connection(id);
                        },
                        on_connect_end: move |id: String| {
                            let mut state = APP_STATE.write();
                            if let Some(edge_id) = state.finish_connection(&id) {
                                tracing::debug!("Created edge {}", edge_id);
                            }
                        },
                    }
                }
            }

            ZoomControls {
                zoom_percent: canvas.zoom_percent(),
                on_zoom_in: move |_| APP_STATE.write().canvas.zoom_in(),
                on_zoom_out: move |_| APP_STATE.write().canvas.zoom_out(),
                on_zoom_reset: move |_| APP_STATE.write().canvas.reset_view(),
                on_fit_view: move |_| interactions.fit_view(viewport_w, viewport_h),
            }

            if canvas.show_minimap && !graph.nodes.is_empty() {
                Minimap {
                    nodes: graph
                        .nodes
                        .iter()
                        .map(|n| (n.bounds(), color_for(&n.node_type)))
                        .collect::<Vec<_>>(),
                }
            }

            div { class: "canvas-info", "{summary}" }

            if graph.nodes.is_empty() {
                CanvasEmptyState {}
            }
        }
    }
}

// ============================================================================
// Canvas Grid Component
// ============================================================================

/// Dotted SVG background
#[component]
fn CanvasGrid(grid_size: f64, pan: Position, zoom: f64) -> Element {
    let scaled = grid_size * zoom;
    let offset_x = pan.x % scaled;
    let offset_y = pan.y % scaled;
    let radius = (zoom * 1.0).max(0.5);

    rsx! {
        svg {
            class: "canvas-grid",
            xmlns: "http://www.w3.org/2000/svg",
            defs {
                pattern {
                    id: "canvas-grid-pattern",
                    width: "{scaled}",
                    height: "{scaled}",
                    pattern_units: "userSpaceOnUse",
                    x: "{offset_x}",
                    y: "{offset_y}",
                    circle {
                        cx: "{radius}",
                        cy: "{radius}",
                        r: "{radius}",
                        fill: GRID_DOT_COLOR,
                    }
                }
            }
            rect {
                width: "100%",
                height: "100%",
                fill: "url(#canvas-grid-pattern)",
            }
        }
    }
}

// ============================================================================
// Zoom Controls Component
// ============================================================================

/// Zoom control buttons overlay
#[component]
fn ZoomControls(
    zoom_percent: i32,
    on_zoom_in: EventHandler<()>,
    on_zoom_out: EventHandler<()>,
    on_zoom_reset: EventHandler<()>,
    on_fit_view: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "zoom-controls",
            onmousedown: move |e| e.stop_propagation(),
            button {
                title: "Zoom Out",
                onclick: move |_| on_zoom_out.call(()),
                "−"
            }
            button {
                class: "zoom-level",
                title: "Reset Zoom",
                onclick: move |_| on_zoom_reset.call(()),
                "{zoom_percent}%"
            }
            button {
                title: "Zoom In",
                onclick: move |_| on_zoom_in.call(()),
                "+"
            }
            button {
                title: "Fit View",
                onclick: move |_| on_fit_view.call(()),
                "⊡"
            }
        }
    }
}

// ============================================================================
// Minimap Component
// ============================================================================

/// Scale and offset that fit `bounds` into the minimap
pub fn minimap_transform(bounds: Rect) -> (f64, Position) {
    let padded = bounds.expand(20.0);
    let scale = (MINIMAP_WIDTH / padded.size.width).min(MINIMAP_HEIGHT / padded.size.height);
    let offset = Position::new(
        (MINIMAP_WIDTH - padded.size.width * scale) / 2.0 - padded.position.x * scale,
        (MINIMAP_HEIGHT - padded.size.height * scale) / 2.0 - padded.position.y * scale,
    );
    (scale, offset)
}

/// Overview of every node, coloured by type
#[component]
fn Minimap(nodes: Vec<(Rect, &'static str)>) -> Element {
    let Some(bounds) = Rect::bounding(nodes.iter().map(|(r, _)| *r)) else {
        return rsx! {};
    };
    let (scale, offset) = minimap_transform(bounds);
    let scaled: Vec<(Rect, &'static str)> = nodes
        .iter()
        .map(|(rect, color)| {
            let position = Position::new(
                rect.position.x * scale + offset.x,
                rect.position.y * scale + offset.y,
            );
            let size = Size::new(rect.size.width * scale, rect.size.height * scale);
            (Rect::new(position, size), *color)
        })
        .collect();

    rsx! {
        svg {
            class: "minimap",
            width: "{MINIMAP_WIDTH}",
            height: "{MINIMAP_HEIGHT}",
            onmousedown: move |e| e.stop_propagation(),
            for (index, (area, color)) in scaled.iter().enumerate() {
                rect {
                    key: "{index}",
                    x: "{area.position.x}",
                    y: "{area.position.y}",
                    width: "{area.size.width}",
                    height: "{area.size.height}",
                    rx: "2",
                    fill: "{color}",
                }
            }
        }
    }
}

// ============================================================================
// Canvas Empty State Component
// ============================================================================

/// Empty state shown when the workflow has no nodes
#[component]
fn CanvasEmptyState() -> Element {
    rsx! {
        div {
            class: "canvas-empty",
            h3 { "No Components Yet" }
            p { "Pick a component from the palette to start building your workflow." }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimap_transform_fits_bounds() {
        let bounds = Rect::new(Position::new(100.0, 100.0), Size::new(900.0, 300.0));
        let (scale, offset) = minimap_transform(bounds);
        let left = bounds.position.x * scale + offset.x;
        let right = bounds.right() * scale + offset.x;
        let top = bounds.position.y * scale + offset.y;
        let bottom = bounds.bottom() * scale + offset.y;
        assert!(left >= 0.0 && right <= MINIMAP_WIDTH);
        assert!(top >= 0.0 && bottom <= MINIMAP_HEIGHT);
    }
}
