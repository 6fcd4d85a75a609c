//! File Operations for Weave
//!
//! This module provides workflow export/import using the `rfd` crate for
//! native file dialogs and `tokio::fs` for the reads and writes, so the UI
//! thread never blocks on disk. Encoding and decoding live in
//! `weave_ir::serialization`.

use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};
use weave_core::{WeaveError, WeaveResult};
use weave_ir::{
    WorkflowGraph,
    serialization::{DEFAULT_FILE_NAME, WORKFLOW_EXTENSION, ensure_extension, export_workflow, import_from_bytes},
};

// ============================================================================
// File Filter Constants
// ============================================================================

/// Display name for file filter
pub const FILE_TYPE_NAME: &str = "Workflow JSON";

// ============================================================================
// File Dialog Functions
// ============================================================================

/// Open a file dialog to pick a workflow to import
///
/// Returns the selected file path, or None if the dialog was cancelled.
pub async fn show_import_dialog() -> Option<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title("Import Workflow")
        .add_filter(FILE_TYPE_NAME, &[WORKFLOW_EXTENSION])
        .add_filter("All Files", &["*"])
        .pick_file()
        .await?;

    Some(file.path().to_path_buf())
}

/// Open a file dialog to pick where to export a workflow
///
/// If `starting_dir` is provided, the dialog opens in that directory.
/// The returned path always ends in `.json`.
pub async fn show_export_dialog(starting_dir: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = AsyncFileDialog::new()
        .set_title("Export Workflow")
        .add_filter(FILE_TYPE_NAME, &[WORKFLOW_EXTENSION])
        .set_file_name(DEFAULT_FILE_NAME);

    if let Some(dir) = starting_dir {
        let dir = if dir.is_file() {
            dir.parent().unwrap_or(dir)
        } else {
            dir
        };
        if dir.exists() {
            dialog = dialog.set_directory(dir);
        }
    }

    let file = dialog.save_file().await?;
    Some(ensure_extension(file.path()))
}

// ============================================================================
// Workflow File Operations
// ============================================================================

/// Export a workflow as pretty JSON
///
/// If `path` is `None`, shows a save dialog starting in `hint_dir`.
/// Returns the path written.
pub async fn export_workflow_to_file(
    graph: &WorkflowGraph,
    path: Option<PathBuf>,
    hint_dir: Option<PathBuf>,
) -> WeaveResult<PathBuf> {
    let file_path = match path {
        Some(p) => ensure_extension(p),
        None => show_export_dialog(hint_dir.as_deref())
            .await
            .ok_or(WeaveError::Cancelled)?,
    };

    let json = export_workflow(graph)?;
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&file_path, json)
        .await
        .map_err(|e| WeaveError::FileWrite {
            path: file_path.clone(),
            message: e.to_string(),
        })?;

    Ok(file_path)
}

/// Import a workflow file
///
/// Opens a file dialog if no path is provided. Nothing is applied here; the
/// caller replaces the editor state only when this returns `Ok`.
pub async fn import_workflow_from_file(path: Option<PathBuf>) -> WeaveResult<(WorkflowGraph, PathBuf)> {
    let file_path = match path {
        Some(p) => p,
        None => show_import_dialog().await.ok_or(WeaveError::Cancelled)?,
    };

    let bytes = tokio::fs::read(&file_path)
        .await
        .map_err(|e| WeaveError::FileRead {
            path: file_path.clone(),
            message: e.to_string(),
        })?;
    let graph = import_from_bytes(&bytes)?;
    Ok((graph, file_path))
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Get a display-friendly name from a path
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(DEFAULT_FILE_NAME)
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use weave_ir::NodeType;

    #[test]
    fn test_display_name() {
        let path = PathBuf::from("/home/user/flows/onboarding.json");
        assert_eq!(display_name(&path), "onboarding.json");
    }

    #[tokio::test]
    async fn test_export_then_import() {
        let temp_dir = TempDir::new().unwrap();
        let mut graph = WorkflowGraph::new();
        let id = graph.add_node(NodeType::Table).unwrap();
        graph.rename_node(&id, "Customers").unwrap();

        let written = export_workflow_to_file(&graph, Some(temp_dir.path().join("flows/customers")), None)
            .await
            .unwrap();
        assert_eq!(written.extension().unwrap(), "json");

        let (restored, path) = import_workflow_from_file(Some(written.clone())).await.unwrap();
        assert_eq!(path, written);
        assert_eq!(restored, graph);
    }

    #[tokio::test]
    async fn test_import_errors_are_reported() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        let err = import_workflow_from_file(Some(missing)).await.unwrap_err();
        assert!(err.is_io());

        let broken = temp_dir.path().join("broken.json");
        tokio::fs::write(&broken, "{ \"nodes\": 3 }").await.unwrap();
        let err = import_workflow_from_file(Some(broken)).await.unwrap_err();
        assert!(matches!(err, WeaveError::InvalidWorkflowFormat(_)));
    }
}
