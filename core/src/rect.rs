//! World-space rectangles.
//!
//! Coordinates are `f32` world units with `y` growing upward, so `(x, y)` is
//! the bottom-left corner.
//!
//! Adjacency checks use exact float equality. Rectangles produced by the grid
//! scanner sit at integer cell index × cell size, and merging only adds whole
//! cell extents together, so every edge compared here is computed the same way
//! on both sides. An epsilon would start merging rectangles that are close but
//! not touching, which changes the output.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Centre point `(x, y)`.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half width and half height.
    #[inline]
    pub fn half_extents(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// `true` if `other` starts exactly where `self` ends on the x axis and
    /// both share the same row band (`y` and `height`).
    pub fn is_row_adjacent_to(&self, other: &Rect) -> bool {
        self.y == other.y && self.height == other.height && self.right() == other.x
    }

    /// `true` if `other` sits exactly on top of `self` and both share the same
    /// column band (`x` and `width`).
    pub fn is_column_adjacent_to(&self, other: &Rect) -> bool {
        self.x == other.x && self.width == other.width && self.top() == other.y
    }

    /// Half-open containment test: left/bottom edges are inside, right/top are not.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.top()
    }

    /// `true` if the interiors of the two rectangles intersect.
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}, {}, {}, {}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_and_area() {
        let r = Rect::new(16.0, 32.0, 48.0, 16.0);
        assert_eq!(r.right(), 64.0);
        assert_eq!(r.top(), 48.0);
        assert_eq!(r.area(), 768.0);
        assert_eq!(r.center(), (40.0, 40.0));
        assert_eq!(r.half_extents(), (24.0, 8.0));
    }

    #[test]
    fn row_adjacency_requires_same_band() {
        let a = Rect::new(0.0, 0.0, 16.0, 16.0);
        assert!(a.is_row_adjacent_to(&Rect::new(16.0, 0.0, 16.0, 16.0)));
        // Gap on the x axis
        assert!(!a.is_row_adjacent_to(&Rect::new(17.0, 0.0, 16.0, 16.0)));
        // Different height
        assert!(!a.is_row_adjacent_to(&Rect::new(16.0, 0.0, 16.0, 32.0)));
        // Left neighbour is not "after" a
        assert!(!a.is_row_adjacent_to(&Rect::new(-16.0, 0.0, 16.0, 16.0)));
    }

    #[test]
    fn column_adjacency_requires_same_band() {
        let a = Rect::new(0.0, 0.0, 32.0, 16.0);
        assert!(a.is_column_adjacent_to(&Rect::new(0.0, 16.0, 32.0, 8.0)));
        assert!(!a.is_column_adjacent_to(&Rect::new(0.0, 16.0, 16.0, 8.0)));
        assert!(!a.is_column_adjacent_to(&Rect::new(8.0, 16.0, 32.0, 8.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 8.0, 8.0);
        let b = Rect::new(8.0, 0.0, 8.0, 8.0);
        let c = Rect::new(4.0, 4.0, 8.0, 8.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn contains_point_is_half_open() {
        let r = Rect::new(0.0, 0.0, 8.0, 8.0);
        assert!(r.contains_point(0.0, 0.0));
        assert!(r.contains_point(7.9, 7.9));
        assert!(!r.contains_point(8.0, 4.0));
        assert!(!r.contains_point(4.0, 8.0));
    }

    #[test]
    fn display_format() {
        assert_eq!(Rect::new(0.0, 8.0, 16.0, 24.0).to_string(), "{0, 8, 16, 24}");
    }
}
