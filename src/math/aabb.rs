use super::{Point2, Vector2};

/// An axis-aligned bounding box in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (smallest x and y).
    pub min: Point2,
    /// Maximum corner (largest x and y).
    pub max: Point2,
}

impl Aabb {
    /// Creates a box from two corners, normalizing their order.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a box of the given size centered on `center`.
    #[must_use]
    pub fn from_center(center: Point2, width: f64, height: f64) -> Self {
        let half = Vector2::new(width * 0.5, height * 0.5);
        Self::new(center - half, center + half)
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns the four corners, clockwise on screen from the top-left.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }
}
