//! # Weave IR
//!
//! The workflow model edited by the Weave builder. It contains the data
//! structures for a workflow document and the operations the editor applies
//! to it.
//!
//! ## Core Concepts
//!
//! - **Node**: a UI component on the canvas (table, form, form group,
//!   display, action, permission) with a label and a free-form config
//! - **Edge**: a directed connection between two nodes
//! - **WorkflowGraph**: the root container that holds all nodes and edges
//! - **EditorSchema**: per-type field descriptors that drive the inspector
//!   and bound which config paths may be edited
//! - **NodePreview**: the read-only summary shown on each node card
//!

// Module declarations
pub mod config;
pub mod edge;
pub mod graph;
pub mod node;
pub mod palette;
pub mod preview;
pub mod rules;
pub mod schema;
pub mod serialization;
pub mod validation;

// Re-export commonly used types at crate root
pub use config::{AnyNodeConfig, Choice, default_label, default_node_data};
pub use edge::{Connection, Edge, EdgeData, EdgeType};
pub use graph::{SAMPLE_NODE_ID, WorkflowGraph};
pub use node::{Node, NodeData, NodeType};
pub use palette::{NodeTemplate, SPAWN_RANGE, color_for, glyph_for, template_for, templates};
pub use preview::{NodePreview, PreviewBody};
pub use rules::{ValidationRule, ValidationType};
pub use schema::{EditorSchema, FieldDescriptor, Section, SelectOption, Widget};
pub use serialization::{
    DEFAULT_FILE_NAME, WORKFLOW_EXTENSION, export_to_file, export_workflow, import_from_bytes,
    import_from_file, import_workflow,
};
pub use validation::{Linter, LintRule, ValidationResult, lint};

// Re-export core types that are commonly used with IR
pub use weave_core::{
    ConfigMap, ConfigPath, ConfigValue, EdgeId, NodeId, Persistable, Position, Positioned, Rect,
    Size, Validatable, ValueKind, WeaveError, WeaveResult,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        // Re-exported from core
        ConfigPath,
        ConfigValue,
        // Model
        Connection,
        Edge,
        EditorSchema,
        FieldDescriptor,
        Node,
        NodeData,
        // Views
        NodePreview,
        NodeType,
        Position,
        Section,
        ValidationResult,
        WeaveError,
        WeaveResult,
        Widget,
        WorkflowGraph,
        // Operations
        export_workflow,
        import_workflow,
        lint,
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(crate::WORKFLOW_EXTENSION, "json");
    }

    #[test]
    fn test_prelude_covers_editor_flow() {
        let mut graph = WorkflowGraph::new();
        let id = graph.add_node(NodeType::Display).unwrap();
        graph
            .update_node_data(&id, "config.content.value", ConfigValue::from("Hello"))
            .unwrap();

        let restored = import_workflow(&export_workflow(&graph).unwrap()).unwrap();
        let node = restored.node(&id).unwrap();
        assert_eq!(node.config().str_or("content.value", ""), "Hello");
        assert!(lint(&restored).is_clean());
    }
}
