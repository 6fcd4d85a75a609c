//! # Canvas Interactions Hook
//!
//! Provides the hook for canvas interactions:
//! - Pan (dragging the background)
//! - Zoom (mouse wheel, centered on the cursor)
//! - Node dragging and connection drawing, delegated to [`AppState`]
//! - Event coordinate helpers
//!
//! [`AppState`]: crate::state::AppState

use dioxus::prelude::*;
use weave_core::Position;

use crate::state::{APP_STATE, ZOOM_STEP};

// ============================================================================
// Pan State
// ============================================================================

/// State for canvas panning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanState {
    /// Whether panning is currently active
    pub is_panning: bool,
    /// Starting mouse position when pan began
    pub start_mouse: Position,
    /// Starting pan offset when pan began
    pub start_pan: Position,
}

impl Default for PanState {
    fn default() -> Self {
        Self {
            is_panning: false,
            start_mouse: Position::zero(),
            start_pan: Position::zero(),
        }
    }
}

impl PanState {
    /// Create a new pan state
    pub fn new() -> Self {
        Self::default()
    }

    /// Start panning from a mouse position
    pub fn start(&mut self, mouse_pos: Position, current_pan: Position) {
        self.is_panning = true;
        self.start_mouse = mouse_pos;
        self.start_pan = current_pan;
    }

    /// Stop panning
    pub fn stop(&mut self) {
        self.is_panning = false;
    }

    /// Pan offset for the current mouse position
    pub fn calculate_pan(&self, current_mouse: Position) -> Position {
        self.start_pan.offset(
            current_mouse.x - self.start_mouse.x,
            current_mouse.y - self.start_mouse.y,
        )
    }
}

// ============================================================================
// Canvas Interactions
// ============================================================================

/// Canvas interaction state and handlers
#[derive(Debug, Clone, Copy)]
pub struct CanvasInteractions {
    /// Current pan state
    pub pan_state: Signal<PanState>,
}

impl CanvasInteractions {
    /// Start panning
    pub fn start_pan(&self, screen_pos: Position) {
        let current_pan = APP_STATE.read().canvas.pan;
        let mut pan_state = self.pan_state;
        pan_state.write().start(screen_pos, current_pan);
        APP_STATE.write().canvas.is_panning = true;
    }

    /// Update pan while dragging the background
    pub fn update_pan(&self, screen_pos: Position) {
        let pan_state = *self.pan_state.read();
        if !pan_state.is_panning {
            return;
        }
        APP_STATE.write().canvas.pan = pan_state.calculate_pan(screen_pos);
    }

    /// Stop panning
    pub fn stop_pan(&self) {
        let mut pan_state = self.pan_state;
        pan_state.write().stop();
        APP_STATE.write().canvas.is_panning = false;
    }

    /// Whether the background is being dragged
    pub fn is_panning(&self) -> bool {
        self.pan_state.read().is_panning
    }

    /// Zoom one step in (`direction > 0`) or out, keeping `anchor` fixed
    pub fn zoom_toward(&self, direction: f64, anchor: Position) {
        let factor = if direction > 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
        APP_STATE.write().canvas.zoom_at(anchor, factor);
    }

    /// Fit every node into a viewport of the given size
    pub fn fit_view(&self, viewport_width: f64, viewport_height: f64) {
        let mut state = APP_STATE.write();
        match state.graph.bounds() {
            Some(bounds) => state
                .canvas
                .fit_view(bounds, viewport_width, viewport_height),
            None => state.canvas.reset_view(),
        }
    }
}

// ============================================================================
// Hook
// ============================================================================

/// Hook for canvas interactions
pub fn use_canvas_interactions() -> CanvasInteractions {
    let pan_state = use_signal(PanState::new);
    CanvasInteractions { pan_state }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Extract position from mouse event
pub fn position_from_mouse_event(e: &MouseEvent) -> Position {
    let coords = e.client_coordinates();
    Position::new(coords.x, coords.y)
}

/// Zoom direction of a wheel event: positive zooms in
pub fn zoom_direction_from_wheel(e: &WheelEvent) -> f64 {
    let delta_y = match e.delta() {
        dioxus::html::geometry::WheelDelta::Pixels(v) => v.y,
        dioxus::html::geometry::WheelDelta::Lines(v) => v.y * 20.0,
        dioxus::html::geometry::WheelDelta::Pages(v) => v.y * 400.0,
    };
    if delta_y < 0.0 {
        1.0
    } else if delta_y > 0.0 {
        -1.0
    } else {
        0.0
    }
}

// ============================================================================
// Tests
// ============================================================================
