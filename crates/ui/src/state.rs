//! Application State Management for Weave
//!
//! This module provides centralized state management using Dioxus 0.7 Signals.
//! It holds the workflow being edited, the selection, the canvas viewport and
//! panel state. Every editor operation is a method on [`AppState`] so the
//! components stay thin and the behavior can be tested without a renderer.

use dioxus::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, error, info, warn};
use weave_core::{NodeId, Position, Rect, WeaveError, WeaveResult};
use weave_ir::{Connection, ConfigValue, Node, NodeType, WorkflowGraph, lint};

// ============================================================================
// Canvas State
// ============================================================================

/// Smallest zoom level
pub const MIN_ZOOM: f64 = 0.25;
/// Largest zoom level
pub const MAX_ZOOM: f64 = 3.0;
/// Factor applied per zoom step
pub const ZOOM_STEP: f64 = 1.2;

/// State for the visual canvas (pan, zoom, interactions)
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasState {
    /// Current pan offset in screen pixels
    pub pan: Position,
    /// Current zoom level (1.0 = 100%)
    pub zoom: f64,
    /// Whether the background is being dragged
    pub is_panning: bool,
    /// Source node of a connection being drawn
    pub connecting_from: Option<NodeId>,
    /// Current mouse position in canvas coordinates
    pub mouse_position: Position,
    /// Node being dragged and the grab offset inside its card
    pub dragging: Option<(NodeId, Position)>,
    /// Whether grid snapping is enabled while dragging
    pub snap_to_grid: bool,
    /// Grid size in canvas pixels
    pub grid_size: f64,
    /// Whether to show the dotted background
    pub show_grid: bool,
    /// Whether to show the minimap
    pub show_minimap: bool,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            pan: Position::zero(),
            zoom: 1.0,
            is_panning: false,
            connecting_from: None,
            mouse_position: Position::zero(),
            dragging: None,
            snap_to_grid: false,
            grid_size: 20.0,
            show_grid: true,
            show_minimap: true,
        }
    }
}

impl CanvasState {
    /// Create a new canvas state
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to default view
    pub fn reset_view(&mut self) {
        self.pan = Position::zero();
        self.zoom = 1.0;
    }

    /// Zoom in by a step
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
    }

    /// Zoom out by a step
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Zoom by `factor` keeping the screen point `anchor` fixed
    pub fn zoom_at(&mut self, anchor: Position, factor: f64) {
        let before = self.screen_to_canvas(anchor);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan = Position::new(
            anchor.x - before.x * self.zoom,
            anchor.y - before.y * self.zoom,
        );
    }

    /// Fit `bounds` into a viewport of the given screen size
    pub fn fit_view(&mut self, bounds: Rect, viewport_width: f64, viewport_height: f64) {
        let padded = bounds.expand(40.0);
        if padded.size.width <= 0.0 || padded.size.height <= 0.0 {
            self.reset_view();
            return;
        }
        let zoom = (viewport_width / padded.size.width)
            .min(viewport_height / padded.size.height)
            .clamp(MIN_ZOOM, 1.0);
        self.zoom = zoom;
        self.pan = Position::new(
            (viewport_width - padded.size.width * zoom) / 2.0 - padded.position.x * zoom,
            (viewport_height - padded.size.height * zoom) / 2.0 - padded.position.y * zoom,
        );
    }

    /// Convert screen coordinates to canvas coordinates
    pub fn screen_to_canvas(&self, screen_pos: Position) -> Position {
        Position::new(
            (screen_pos.x - self.pan.x) / self.zoom,
            (screen_pos.y - self.pan.y) / self.zoom,
        )
    }

    /// Convert canvas coordinates to screen coordinates
    pub fn canvas_to_screen(&self, canvas_pos: Position) -> Position {
        Position::new(
            canvas_pos.x * self.zoom + self.pan.x,
            canvas_pos.y * self.zoom + self.pan.y,
        )
    }

    /// Snap position to grid if enabled
    pub fn snap_position(&self, pos: Position) -> Position {
        if self.snap_to_grid {
            pos.snapped(self.grid_size)
        } else {
            pos
        }
    }

    /// Start drawing a connection from a node's source handle
    pub fn start_connection(&mut self, node_id: impl Into<NodeId>) {
        self.connecting_from = Some(node_id.into());
    }

    /// Cancel connection drawing
    pub fn cancel_connection(&mut self) {
        self.connecting_from = None;
    }

    /// Start dragging a node grabbed at `grab` (canvas coordinates)
    pub fn start_drag(&mut self, node_id: impl Into<NodeId>, node_position: Position, grab: Position) {
        let offset = Position::new(grab.x - node_position.x, grab.y - node_position.y);
        self.dragging = Some((node_id.into(), offset));
    }

    /// Stop dragging
    pub fn stop_drag(&mut self) {
        self.dragging = None;
    }

    /// Zoom as a whole percentage
    pub fn zoom_percent(&self) -> i32 {
        (self.zoom * 100.0).round() as i32
    }
}

// ============================================================================
// UI State
// ============================================================================

/// General UI state (panels, status bar, inline errors)
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Whether the node palette is shown
    pub palette_open: bool,
    /// Whether the inspector panel is shown
    pub inspector_open: bool,
    /// Palette template currently being dragged onto the canvas
    pub palette_drag: Option<NodeType>,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
    /// Rejected inspector edits of the selected node, by path
    pub field_errors: BTreeMap<String, String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            palette_open: true,
            inspector_open: true,
            palette_drag: None,
            status_message: None,
            field_errors: BTreeMap::new(),
        }
    }
}

impl UiState {
    /// Create new UI state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle palette
    pub fn toggle_palette(&mut self) {
        self.palette_open = !self.palette_open;
    }

    /// Toggle inspector
    pub fn toggle_inspector(&mut self) {
        self.inspector_open = !self.inspector_open;
    }

    /// Inline error for an inspector field
    pub fn field_error(&self, path: &str) -> Option<&str> {
        self.field_errors.get(path).map(String::as_str)
    }
}

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    /// CSS modifier for the status bar
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusLevel::Info => "status-info",
            StatusLevel::Success => "status-success",
            StatusLevel::Warning => "status-warning",
            StatusLevel::Error => "status-error",
        }
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone)]
pub struct AppState {
    /// The workflow being edited
    pub graph: WorkflowGraph,
    /// Id of the node shown in the inspector
    pub selected: Option<NodeId>,
    /// Canvas state
    pub canvas: CanvasState,
    /// UI state
    pub ui: UiState,
}

impl Default for AppState {
    fn default() -> Self {
        let graph = WorkflowGraph::with_sample().unwrap_or_else(|e| {
            warn!("Could not build the sample workflow: {}", e);
            WorkflowGraph::new()
        });
        Self {
            graph,
            selected: None,
            canvas: CanvasState::new(),
            ui: UiState::new(),
        }
    }
}

impl AppState {
    /// Create the initial state: the sample workflow, nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state around an existing graph
    pub fn with_graph(graph: WorkflowGraph) -> Self {
        Self {
            graph,
            ..Self::empty()
        }
    }

    /// Create a state with an empty workflow
    pub fn empty() -> Self {
        Self {
            graph: WorkflowGraph::new(),
            selected: None,
            canvas: CanvasState::new(),
            ui: UiState::new(),
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// The selected node, if it still exists
    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.as_deref().and_then(|id| self.graph.node(id))
    }

    /// Show a node in the inspector
    pub fn select_node(&mut self, id: impl Into<NodeId>) {
        let id = id.into();
        if self.selected.as_ref() != Some(&id) {
            self.ui.field_errors.clear();
        }
        self.selected = Some(id);
    }

    /// Clear the inspector
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.ui.field_errors.clear();
    }

    /// Check if a node is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    // ========================================================================
    // Node Operations
    // ========================================================================

    /// Add a node of `node_type` at a random spot near the origin
    pub fn add_node(&mut self, node_type: NodeType) -> WeaveResult<NodeId> {
        let id = self.graph.add_node(node_type.clone())?;
        info!("Added {} node {}", node_type, id);
        self.ui
            .set_status(format!("Added {}", node_type.display_name()), StatusLevel::Success);
        Ok(id)
    }

    /// Add a node dropped from the palette at a screen position
    pub fn drop_node(&mut self, node_type: NodeType, screen: Position) -> WeaveResult<NodeId> {
        let position = self.canvas.snap_position(self.canvas.screen_to_canvas(screen));
        let id = self.graph.add_node_at(node_type.clone(), position)?;
        info!("Dropped {} node {} at ({}, {})", node_type, id, position.x, position.y);
        Ok(id)
    }

    /// Apply an inspector edit to the selected node.
    ///
    /// The value is always written. When it strays from the editor schema
    /// (undeclared path, wrong kind, out of range) the problem is kept as an
    /// inline warning for that field; a conforming write clears it.
    pub fn update_selected(&mut self, path: &str, value: ConfigValue) -> WeaveResult<()> {
        let id = self
            .selected
            .clone()
            .ok_or_else(|| WeaveError::UiState("No node selected".to_string()))?;
        let check = self.graph.check_node_data(&id, path, &value);
        self.graph.update_node_data(&id, path, value)?;
        match check {
            Ok(()) => {
                self.ui.field_errors.remove(path);
            }
            Err(e) => {
                warn!("Edit of {} on {} does not match its field: {}", path, id, e);
                self.ui.field_errors.insert(path.to_string(), e.to_string());
            }
        }
        Ok(())
    }

    /// Move the selected node to an absolute position
    pub fn position_selected(&mut self, position: Position) -> WeaveResult<()> {
        let id = self
            .selected
            .clone()
            .ok_or_else(|| WeaveError::UiState("No node selected".to_string()))?;
        self.graph.set_node_position(&id, position)
    }

    /// Delete the selected node. Edges that reference it are kept.
    pub fn delete_selected(&mut self) -> Option<Node> {
        let id = self.selected.take()?;
        self.ui.field_errors.clear();
        let removed = self.graph.remove_node(&id)?;
        let dangling = self.graph.edges_for_node(&id).len();
        info!("Deleted node {} ({} edges left dangling)", id, dangling);
        self.ui
            .set_status(format!("Deleted {}", removed.label()), StatusLevel::Info);
        Some(removed)
    }

    /// Drop edges whose endpoints no longer exist
    pub fn prune_dangling_edges(&mut self) -> usize {
        let removed = self.graph.prune_dangling_edges();
        self.ui.set_status(
            format!("Removed {} dangling edge(s)", removed),
            StatusLevel::Info,
        );
        removed
    }

    // ========================================================================
    // Canvas Interactions
    // ========================================================================

    /// Begin dragging a node at a screen position
    pub fn begin_drag(&mut self, id: &str, screen: Position) {
        let Some(node) = self.graph.node(id) else {
            return;
        };
        let grab = self.canvas.screen_to_canvas(screen);
        let position = node.position;
        self.canvas.start_drag(id, position, grab);
        self.select_node(id);
    }

    /// Pointer moved over the canvas
    pub fn pointer_moved(&mut self, screen: Position) {
        let point = self.canvas.screen_to_canvas(screen);
        self.canvas.mouse_position = point;
        if let Some((id, offset)) = self.canvas.dragging.clone() {
            let target = self
                .canvas
                .snap_position(Position::new(point.x - offset.x, point.y - offset.y));
            if let Err(e) = self.graph.set_node_position(&id, target) {
                debug!("Dropping drag of vanished node: {}", e);
                self.canvas.stop_drag();
            }
        }
    }

    /// Pointer released over the canvas
    pub fn pointer_released(&mut self) {
        self.canvas.stop_drag();
        self.canvas.is_panning = false;
    }

    /// Finish a connection on `target`'s input handle
    pub fn finish_connection(&mut self, target: &str) -> Option<String> {
        let source = self.canvas.connecting_from.take()?;
        let id = self.graph.connect(Connection::new(source, target));
        debug!("Connected edge {}", id);
        Some(id)
    }

    // ========================================================================
    // Toolbar Actions
    // ========================================================================

    /// Replace the whole workflow with an imported one
    pub fn apply_import(&mut self, graph: WorkflowGraph, source: &str) {
        info!(
            "Imported {} nodes and {} edges from {}",
            graph.node_count(),
            graph.edge_count(),
            source
        );
        let report = lint(&graph);
        for warning in &report.warnings {
            warn!("{}: {}", source, warning.message);
        }
        for problem in &report.errors {
            warn!("{}: {}", source, problem.message);
        }
        self.graph.replace(graph);
        self.clear_selection();
        self.canvas.connecting_from = None;
        self.canvas.stop_drag();
        if report.is_clean() {
            self.ui.set_status(format!("Imported {}", source), StatusLevel::Success);
        } else {
            self.ui.set_status(
                format!("Imported {} ({})", source, report.summary()),
                StatusLevel::Warning,
            );
        }
    }

    /// Report a failed import; the current workflow is kept
    pub fn import_failed(&mut self, err: &WeaveError) {
        error!("Import failed: {}", err);
        self.ui
            .set_status(format!("Import failed: {}", err), StatusLevel::Error);
    }

    /// Save has no backend; the request is only logged
    pub fn save(&mut self) {
        info!(
            "Save requested for workflow with {} nodes and {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.ui.set_status("Save requested", StatusLevel::Info);
    }

    /// Run has no executor; the request is only logged
    pub fn run(&mut self) {
        info!("Run requested for workflow: {}", self.graph.summary());
        self.ui.set_status("Run requested", StatusLevel::Info);
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
/// Use this in components to access and modify app state
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to get the selected node id
pub fn use_selected_id() -> Option<NodeId> {
    APP_STATE.read().selected.clone()
}

/// Hook to get canvas state
pub fn use_canvas_state() -> CanvasState {
    APP_STATE.read().canvas.clone()
}

// ============================================================================
// Tests
// ============================================================================
