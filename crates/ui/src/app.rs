//! Main Application Component for Weave
//!
//! Root Dioxus component: toolbar on top, then the node palette, the canvas
//! and the inspector side by side, and a status bar at the bottom.

use dioxus::prelude::*;
use weave_core::WeaveError;

use crate::components::{Canvas, Inspector, NodePalette};
use crate::file_ops;
use crate::state::{APP_STATE, StatusLevel};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Weave UI initialized");
    });

    let handle_key_down = move |e: KeyboardEvent| {
        let modifiers = e.modifiers();
        let command = modifiers.ctrl() || modifiers.meta();
        if let Some(Shortcut::Save) = Shortcut::from_key(&e.key(), command) {
            e.prevent_default();
            APP_STATE.write().save();
        }
    };

    rsx! {
        div {
            class: "app-container",
            onkeydown: handle_key_down,

            Toolbar {}

            div {
                class: "app-main",
                NodePalette {}
                Canvas {}
                Inspector {}
            }

            StatusBar {}
        }
    }
}

// ============================================================================
// Shortcuts
// ============================================================================

/// Keyboard shortcuts handled at the application root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Save,
}

impl Shortcut {
    /// Shortcut for a key press; `command` is Ctrl, or Cmd on macOS
    pub fn from_key(key: &Key, command: bool) -> Option<Self> {
        match key {
            Key::Character(c) if command && c.eq_ignore_ascii_case("s") => Some(Shortcut::Save),
            _ => None,
        }
    }
}

// ============================================================================
// Toolbar Component
// ============================================================================

/// Top toolbar with workflow actions
#[component]
fn Toolbar() -> Element {
    let state = APP_STATE.read();
    let palette_open = state.ui.palette_open;
    let inspector_open = state.ui.inspector_open;
    drop(state);

    rsx! {
        header {
            class: "toolbar",

            div {
                class: "toolbar-brand",
                span { class: "toolbar-logo", "◈" }
                span { "Weave" }
            }

            ToolbarButton {
                icon: "☰",
                label: "Components",
                active: palette_open,
                onclick: move |_| APP_STATE.write().ui.toggle_palette(),
            }

            div { class: "toolbar-separator" }

            ToolbarButton {
                icon: "💾",
                label: "Save",
                shortcut: "Ctrl+S",
                onclick: move |_| APP_STATE.write().save(),
            }

            ToolbarButton {
                icon: "▶",
                label: "Run",
                onclick: move |_| APP_STATE.write().run(),
            }

            div { class: "toolbar-separator" }

            ToolbarButton {
                icon: "⬇",
                label: "Export",
                onclick: move |_| {
                    spawn(async move {
                        let graph = APP_STATE.read().graph.clone();
                        match file_ops::export_workflow_to_file(&graph, None, None).await {
                            Ok(path) => {
                                tracing::info!("Workflow exported to {}", path.display());
                                APP_STATE.write().ui.set_status(
                                    format!("Exported to {}", path.display()),
                                    StatusLevel::Success,
                                );
                            }
                            Err(WeaveError::Cancelled) => {
                                tracing::debug!("Export cancelled by user");
                            }
                            Err(e) => {
                                tracing::error!("Failed to export workflow: {}", e);
                                APP_STATE.write().ui.set_status(
                                    format!("Failed to export: {}", e),
                                    StatusLevel::Error,
                                );
                            }
                        }
                    });
                },
            }

            ToolbarButton {
                icon: "⬆",
                label: "Import",
                onclick: move |_| {
                    spawn(async move {
                        match file_ops::import_workflow_from_file(None).await {
                            Ok((graph, path)) => {
                                APP_STATE
                                    .write()
                                    .apply_import(graph, &file_ops::display_name(&path));
                            }
                            Err(WeaveError::Cancelled) => {
                                tracing::debug!("Import cancelled by user");
                            }
                            Err(e) => APP_STATE.write().import_failed(&e),
                        }
                    });
                },
            }

            div { class: "toolbar-separator" }

            // History is not tracked; the buttons are placeholders
            ToolbarButton {
                icon: "↩",
                label: "Undo",
                shortcut: "Ctrl+Z",
                disabled: true,
                onclick: move |_| {},
            }

            ToolbarButton {
                icon: "↪",
                label: "Redo",
                shortcut: "Ctrl+Y",
                disabled: true,
                onclick: move |_| {},
            }

            div { class: "toolbar-spacer" }

            ToolbarButton {
                icon: "⚙",
                label: "Inspector",
                active: inspector_open,
                onclick: move |_| APP_STATE.write().ui.toggle_inspector(),
            }
        }
    }
}

/// Toolbar button with icon and label
#[component]
fn ToolbarButton(
    icon: &'static str,
    label: &'static str,
    #[props(default)] shortcut: &'static str,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let mut classes = vec!["toolbar-button"];
    if active {
        classes.push("toolbar-button-active");
    }
    if disabled {
        classes.push("toolbar-button-disabled");
    }
    let class = classes.join(" ");

    rsx! {
        button {
            class: "{class}",
            disabled: disabled,
            title: if shortcut.is_empty() { label.to_string() } else { format!("{} ({})", label, shortcut) },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            span { "{icon}" }
            span { class: "toolbar-button-label", "{label}" }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let state = APP_STATE.read();
    let status = state.ui.status_message.clone();
    let summary = state.graph.summary();
    let selected = state.selected.clone();
    drop(state);

    rsx! {
        footer {
            class: "status-bar",

            if let Some(msg) = status {
                span {
                    class: msg.level.css_class(),
                    onclick: move |_| APP_STATE.write().ui.clear_status(),
                    "{msg.text}"
                }
            } else {
                span { "Ready" }
            }

            div { class: "toolbar-spacer" }

            if let Some(id) = selected {
                span { class: "status-selected", "Selected: {id}" }
            }
            span { "{summary}" }
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

    #[test]
    fn test_save_shortcut() {
        let s = Key::Character("s".to_string());
        assert_eq!(Shortcut::from_key(&s, true), Some(Shortcut::Save));
        assert_eq!(
            Shortcut::from_key(&Key::Character("S".to_string()), true),
            Some(Shortcut::Save)
        );
        assert_eq!(Shortcut::from_key(&s, false), None);
        assert_eq!(Shortcut::from_key(&Key::Character("z".to_string()), true), None);
        assert_eq!(Shortcut::from_key(&Key::Delete, true), None);
    }
}
