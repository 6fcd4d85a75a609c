//! # Node Palette
//!
//! Left panel listing one template per node type. Clicking a template adds
//! a node at a random spot; dragging it onto the canvas adds it where it is
//! dropped.

use dioxus::prelude::*;
use weave_ir::{NodeTemplate, templates};

use crate::state::{APP_STATE, StatusLevel};

/// The node palette panel
#[component]
pub fn NodePalette() -> Element {
    let open = APP_STATE.read().ui.palette_open;
    if !open {
        return rsx! {};
    }

    rsx! {
        aside {
            class: "palette",
            div {
                class: "panel-header",
                span { "Components" }
            }
            div {
                class: "palette-list",
                for template in templates().iter() {
                    PaletteItem { key: "{template.node_type}", template: template.clone() }
                }
            }
            p { class: "palette-hint", "Click or drag onto the canvas" }
        }
    }
}

#[component]
fn PaletteItem(template: NodeTemplate) -> Element {
    let click_type = template.node_type.clone();
    let drag_type = template.node_type.clone();

    rsx! {
        div {
            class: "palette-item",
            draggable: "true",
            style: "border-left-color: {template.color};",
            onclick: move |_| {
                let mut state = APP_STATE.write();
                if let Err(e) = state.add_node(click_type.clone()) {
                    tracing::error!("Failed to add node: {}", e);
                    state.ui.set_status(format!("Failed to add node: {}", e), StatusLevel::Error);
                }
            },
            ondragstart: move |_| {
                APP_STATE.write().ui.palette_drag = Some(drag_type.clone());
            },
            ondragend: move |_| {
                APP_STATE.write().ui.palette_drag = None;
            },
            span { class: "palette-glyph", style: "color: {template.color};", "{template.glyph}" }
            div {
                class: "palette-text",
                span { class: "palette-label", "{template.label}" }
                span { class: "palette-description", "{template.description}" }
            }
        }
    }
}
