//! Axis-aligned 2D ranges
//!
//! A `Range2` is a pair of corners. Nothing here validates corner order:
//! `size` takes the absolute difference so an inverted range still reports
//! a sensible extent.

use macroquad::math::Vec2;

/// Axis-aligned rectangle stored as two corners
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Range2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Range2 {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Range whose bottom-center sits on the origin.
    ///
    /// Sprites are anchored at an entity's feet, so the box spans
    /// `-w/2..w/2` horizontally and `0..h` vertically.
    pub fn make_bottom_anchored(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size).shift(Vec2::new(size.x * -0.5, 0.0))
    }

    /// Translate both corners
    pub fn shift(self, delta: Vec2) -> Self {
        Self::new(self.min + delta, self.max + delta)
    }

    /// Push both corners outward by `amount` (min down, max up)
    pub fn grow(self, amount: Vec2) -> Self {
        Self::new(self.min - amount, self.max + amount)
    }

    /// Component-wise extent, never negative
    pub fn size(&self) -> Vec2 {
        (self.min - self.max).abs()
    }

    /// Inclusive on every edge
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}
