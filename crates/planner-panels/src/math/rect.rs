//! Axis-aligned rectangle

use super::{Size, Vec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left origin)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from position and size
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Get position (top-left)
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get the center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Get the right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if the vertical extents of two rectangles overlap
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.y < other.bottom() && self.bottom() > other.y
    }

    /// Check if the horizontal extents of two rectangles overlap
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x
    }

    /// Move the rectangle so it lies inside `bounds`.
    ///
    /// A rectangle larger than `bounds` is pinned to the top-left corner.
    pub fn clamp_within(&self, bounds: Size) -> Rect {
        let max_x = (bounds.width - self.width).max(0.0);
        let max_y = (bounds.height - self.height).max(0.0);
        Rect::new(
            self.x.clamp(0.0, max_x),
            self.y.clamp(0.0, max_y),
            self.width,
            self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_and_center() {
        let r = Rect::new(500.0, 200.0, 300.0, 200.0);
        assert_eq!(r.right(), 800.0);
        assert_eq!(r.bottom(), 400.0);
        assert_eq!(r.center(), Vec2::new(650.0, 300.0));
    }

    #[test]
    fn test_rect_axis_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let c = Rect::new(100.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps_vertically(&c));
        assert!(!a.overlaps_horizontally(&c));
    }

    #[test]
    fn test_rect_clamp_within() {
        let viewport = Size::new(1000.0, 800.0);

        let r = Rect::new(950.0, -20.0, 200.0, 100.0).clamp_within(viewport);
        assert_eq!(r.position(), Vec2::new(800.0, 0.0));

        let huge = Rect::new(30.0, 30.0, 1200.0, 900.0).clamp_within(viewport);
        assert_eq!(huge.position(), Vec2::ZERO);
    }
}
