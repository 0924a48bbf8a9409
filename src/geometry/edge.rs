use crate::math::polygon_2d::left_normal;
use crate::math::{Point2, Vector2};

/// One side of a [`Face`](super::Face): the ordered vertex pair `(a, b)`.
///
/// Midpoint, direction and length are derived on demand rather than stored.
/// Edges only come from a validated face, so `a` and `b` never coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    index: usize,
    a: Point2,
    b: Point2,
}

impl Edge {
    pub(crate) fn new(index: usize, a: Point2, b: Point2) -> Self {
        Self { index, a, b }
    }

    /// Position of this edge within its face, `0..5`.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.a
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.b
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.a, &self.b)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Unit vector from `a` to `b`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        (self.b - self.a) / self.length()
    }

    /// The direction rotated by +90°. For the clockwise-on-screen vertex order
    /// of a face this points toward the face interior.
    #[must_use]
    pub fn perpendicular(&self) -> Vector2 {
        left_normal(self.direction())
    }
}
