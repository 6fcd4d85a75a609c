//! Core types used throughout Weave
//!
//! Identifier aliases and the canvas geometry shared by the workflow
//! model and the UI.

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Node identifiers are free-form strings: generated ids look like
/// `tableNode-1718000000000`, imported ids are kept verbatim.
pub type NodeId = String;

/// Edge identifier
pub type EdgeId = String;

// ============================================================================
// Geometry Types
// ============================================================================

/// Position on the 2D canvas, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a new position
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a position at the origin (0, 0)
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Add an offset to this position
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Round both coordinates to the nearest multiple of `step`
    pub fn snapped(&self, step: f64) -> Self {
        if step <= 0.0 {
            return *self;
        }
        Self {
            x: (self.x / step).round() * step,
            y: (self.y / step).round() * step,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Size of a component on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Footprint used for node cards when laying out edges and the minimap
    pub fn node_card() -> Self {
        Self {
            width: 280.0,
            height: 200.0,
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::node_card()
    }
}

/// Bounding rectangle for components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub position: Position,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(position: Position, size: Size) -> Self {
        Self { position, size }
    }

    /// Check if a point is contained within this rectangle
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.position.x
            && point.x <= self.right()
            && point.y >= self.position.y
            && point.y <= self.bottom()
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.position.x + self.size.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }

    /// Midpoint of the top edge (where incoming edges attach)
    pub fn top_center(&self) -> Position {
        Position::new(self.position.x + self.size.width / 2.0, self.position.y)
    }

    /// Midpoint of the bottom edge (where outgoing edges attach)
    pub fn bottom_center(&self) -> Position {
        Position::new(self.position.x + self.size.width / 2.0, self.bottom())
    }

    /// Grow the rectangle by a uniform margin on every side
    pub fn expand(&self, amount: f64) -> Self {
        Self {
            position: self.position.offset(-amount, -amount),
            size: Size::new(
                self.size.width + amount * 2.0,
                self.size.height + amount * 2.0,
            ),
        }
    }

    /// Bounding box containing both rectangles
    pub fn union(&self, other: &Rect) -> Self {
        let min_x = self.position.x.min(other.position.x);
        let min_y = self.position.y.min(other.position.y);
        let max_x = self.right().max(other.right());
        let max_y = self.bottom().max(other.bottom());

        Self {
            position: Position::new(min_x, min_y),
            size: Size::new(max_x - min_x, max_y - min_y),
        }
    }

    /// Bounding box of a set of rectangles, `None` when the set is empty
    pub fn bounding<I: IntoIterator<Item = Rect>>(rects: I) -> Option<Rect> {
        rects.into_iter().reduce(|acc, r| acc.union(&r))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_offset_and_ops() {
        let pos = Position::new(10.0, 20.0).offset(5.0, -10.0);
        assert_eq!(pos, Position::new(15.0, 10.0));

        let sum = pos + Position::new(1.0, 1.0);
        let diff = pos - Position::new(5.0, 5.0);
        assert_eq!(sum, Position::new(16.0, 11.0));
        assert_eq!(diff, Position::new(10.0, 5.0));
    }

    #[test]
    fn test_position_snapped() {
        let snapped = Position::new(115.0, 127.0).snapped(20.0);
        assert_eq!(snapped, Position::new(120.0, 120.0));

        let untouched = Position::new(3.3, 4.4).snapped(0.0);
        assert_eq!(untouched, Position::new(3.3, 4.4));
    }

    #[test]
    fn test_rect_contains_and_anchors() {
        let rect = Rect::new(Position::new(100.0, 50.0), Size::new(200.0, 100.0));
        assert!(rect.contains(Position::new(150.0, 75.0)));
        assert!(!rect.contains(Position::new(99.0, 75.0)));
        assert_eq!(rect.top_center(), Position::new(200.0, 50.0));
        assert_eq!(rect.bottom_center(), Position::new(200.0, 150.0));
    }

    #[test]
    fn test_rect_union_and_bounding() {
        let a = Rect::new(Position::new(0.0, 0.0), Size::new(10.0, 10.0));
        let b = Rect::new(Position::new(20.0, -5.0), Size::new(10.0, 10.0));
        let u = a.union(&b);
        assert_eq!(u.position, Position::new(0.0, -5.0));
        assert_eq!(u.size, Size::new(30.0, 15.0));

        assert_eq!(Rect::bounding(vec![a, b]), Some(u));
        assert_eq!(Rect::bounding(Vec::new()), None);
    }

    #[test]
    fn test_rect_expand() {
        let rect = Rect::new(Position::new(10.0, 10.0), Size::new(10.0, 10.0)).expand(5.0);
        assert_eq!(rect.position, Position::new(5.0, 5.0));
        assert_eq!(rect.size, Size::new(20.0, 20.0));
    }
}
