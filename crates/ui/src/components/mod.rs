//! # UI Components
//!
//! Dioxus components for the Weave workflow builder.
//!
//! ## Component Hierarchy
//!
//! ```text
//! NodePalette
//! └── PaletteItem (one per node type)
//!
//! Canvas
//! ├── CanvasGrid
//! ├── EdgesLayer (SVG, with the connection preview)
//! ├── NodeCard (multiple)
//! │   └── NodePreviewView
//! ├── ZoomControls
//! └── Minimap
//!
//! Inspector
//! ├── NodeInspector
//! │   └── FieldEditor (one per field descriptor)
//! └── WorkflowOverview
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod canvas;
pub mod connection;
pub mod inputs;
pub mod inspector;
pub mod node_card;
pub mod node_preview;
pub mod palette;

// ============================================================================
// Re-exports
// ============================================================================

pub use canvas::Canvas;
pub use connection::{EdgeGeometry, EdgesLayer, edge_geometry};
pub use inputs::{Checkbox, CheckboxGroup, InputOption, NumberInput, Select, TextArea, TextInput};
pub use inspector::Inspector;
pub use node_card::NodeCard;
pub use node_preview::NodePreviewView;
pub use palette::NodePalette;
