//! Axis-aligned rectangle geometry for bricks and the paddle
//!
//! The playfield is plain screen space: x grows right, y grows down, and
//! every solid thing in it is a rectangle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict interior containment. A point exactly on an edge does not
    /// count, matching the classic canvas hit test.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.left()
            && point.x < self.right()
            && point.y > self.top()
            && point.y < self.bottom()
    }

    /// Strict horizontal span test, used for the paddle rebound check
    pub fn spans_x(&self, x: f32) -> bool {
        x > self.left() && x < self.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_interior() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(rect.contains(Vec2::new(25.0, 40.0)));
        assert!(!rect.contains(Vec2::new(5.0, 40.0)));
        assert!(!rect.contains(Vec2::new(25.0, 70.0)));
    }

    #[test]
    fn test_contains_is_strict_on_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!rect.contains(Vec2::new(0.0, 5.0)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, 0.0)));
        assert!(!rect.contains(Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn test_spans_x() {
        let rect = Rect::new(100.0, 310.0, 75.0, 10.0);
        assert!(rect.spans_x(101.0));
        assert!(rect.spans_x(174.0));
        assert!(!rect.spans_x(100.0));
        assert!(!rect.spans_x(175.0));
        assert!(!rect.spans_x(200.0));
    }

    #[test]
    fn test_center() {
        let rect = Rect::new(30.0, 30.0, 75.0, 20.0);
        let c = rect.center();
        assert!((c.x - 67.5).abs() < 0.001);
        assert!((c.y - 40.0).abs() < 0.001);
    }
}
