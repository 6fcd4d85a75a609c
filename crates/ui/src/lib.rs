//! # Weave UI
//!
//! Dioxus Desktop UI for the Weave workflow builder.
//!
//! ## Features
//!
//! - Node palette with one template per node type
//! - Pan and zoom canvas with draggable node cards and edges
//! - Schema-driven inspector for node labels and configuration
//! - JSON import and export through native file dialogs
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod file_ops;
pub mod hooks;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use weave_core;
pub use weave_ir;

// Re-export main components
pub use app::App;
pub use file_ops::{
    export_workflow_to_file, import_workflow_from_file, show_export_dialog, show_import_dialog,
};
pub use state::{
    APP_STATE, AppState, CanvasState, StatusLevel, StatusMessage, UiState,
};

// Re-export components
pub use components::{
    Canvas, Checkbox, CheckboxGroup, EdgesLayer, Inspector, NodeCard, NodePalette, NumberInput,
    Select, TextArea, TextInput,
};

// Re-export hooks
pub use hooks::{CanvasInteractions, PanState, use_canvas_interactions};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Weave";

/// Application display title
pub const TITLE: &str = "Weave - Visual Workflow Builder";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Weave desktop application
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     weave_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1400.0, 900.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(900.0, 600.0)),
                )
                // The toolbar replaces the native menu
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title_names_the_app() {
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_cover_the_editor() {
        let styles = get_styles();
        for class in [".node-card", ".canvas-container", ".inspector", ".palette", ".toolbar"] {
            assert!(styles.contains(class), "missing {}", class);
        }
    }
}
