//! # UI Hooks
//!
//! Custom Dioxus hooks for the Weave UI.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_canvas;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_canvas::{CanvasInteractions, PanState, use_canvas_interactions};
