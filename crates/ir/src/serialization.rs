//! Workflow export and import
//!
//! A workflow file is a pretty-printed UTF-8 JSON document with exactly two
//! top-level keys, `nodes` and `edges`. There is no version field. Missing
//! keys read as empty lists; unknown keys are ignored.

use crate::graph::WorkflowGraph;
use std::path::{Path, PathBuf};
use tracing::info;
use weave_core::{Persistable, WeaveError, WeaveResult};

// ============================================================================
// Constants
// ============================================================================

/// Extension of workflow files
pub const WORKFLOW_EXTENSION: &str = "json";

/// File name suggested by the export dialog
pub const DEFAULT_FILE_NAME: &str = "workflow.json";

impl Persistable for WorkflowGraph {
    fn file_extension() -> &'static str {
        WORKFLOW_EXTENSION
    }
}

// ============================================================================
// Export
// ============================================================================

/// Serialize a graph to pretty-printed JSON
pub fn export_workflow(graph: &WorkflowGraph) -> WeaveResult<String> {
    graph.to_json()
}

/// Write a graph to a file, creating parent directories
pub fn export_to_file(graph: &WorkflowGraph, path: impl AsRef<Path>) -> WeaveResult<()> {
    let path = path.as_ref();
    graph.save_to_file(path)?;
    info!(
        "Exported workflow ({} nodes, {} edges) to {}",
        graph.node_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(())
}

// ============================================================================
// Import
// ============================================================================

/// Parse a workflow document.
///
/// The document must be a JSON object; `nodes` and `edges` default to
/// empty. Node contents are not checked against their schemas; run
/// [`lint`](crate::validation::lint) for that.
pub fn import_workflow(json: &str) -> WeaveResult<WorkflowGraph> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(WeaveError::InvalidWorkflowFormat(
            "expected an object with 'nodes' and 'edges'".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| WeaveError::InvalidWorkflowFormat(e.to_string()))
}

/// Parse a workflow document from raw bytes
pub fn import_from_bytes(bytes: &[u8]) -> WeaveResult<WorkflowGraph> {
    let json = std::str::from_utf8(bytes)
        .map_err(|e| WeaveError::InvalidWorkflowFormat(format!("Invalid UTF-8: {}", e)))?;
    import_workflow(json)
}

/// Read and parse a workflow file
pub fn import_from_file(path: impl AsRef<Path>) -> WeaveResult<WorkflowGraph> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| WeaveError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let graph = import_workflow(&json).map_err(|e| WeaveError::FileRead {
        path: path.to_path_buf(),
        message: format!("Invalid workflow file: {}", e),
    })?;
    info!(
        "Imported workflow ({} nodes, {} edges) from {}",
        graph.node_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Ensure a path ends in `.json`
pub fn ensure_extension(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.extension().is_some_and(|e| e == WORKFLOW_EXTENSION) {
        path.to_path_buf()
    } else {
        let mut new_path = path.to_path_buf();
        new_path.set_extension(WORKFLOW_EXTENSION);
        new_path
    }
}

// ============================================================================
// Tests
// ============================================================================
