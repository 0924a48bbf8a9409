use crate::math::polygon_2d::left_normal;
use crate::math::{Aabb, Point2, Vector2};

/// A rectangle rotated into an arbitrary orthonormal frame `(u, v)`.
///
/// Travel zones are oriented rectangles laid along face edges: `u` follows the
/// edge and `v` points across it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    center: Point2,
    u: Vector2,
    v: Vector2,
    half_width: f64,
    half_height: f64,
}

impl OrientedRect {
    /// Creates a rectangle centered at `center` whose width runs along the
    /// unit vector `u`. The `v` axis is `u` rotated by +90°.
    #[must_use]
    pub fn new(center: Point2, u: Vector2, half_width: f64, half_height: f64) -> Self {
        Self {
            center,
            u,
            v: left_normal(u),
            half_width,
            half_height,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Unit axis along the width.
    #[must_use]
    pub fn u(&self) -> Vector2 {
        self.u
    }

    /// Unit axis along the height.
    #[must_use]
    pub fn v(&self) -> Vector2 {
        self.v
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    /// Expresses a world point in the rectangle's local `(u, v)` frame.
    #[must_use]
    pub fn to_local(&self, point: &Point2) -> (f64, f64) {
        let d = point - self.center;
        (d.dot(&self.u), d.dot(&self.v))
    }

    /// The four world-space corners, in winding order.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let du = self.u * self.half_width;
        let dv = self.v * self.half_height;
        [
            self.center - du - dv,
            self.center + du - dv,
            self.center + du + dv,
            self.center - du + dv,
        ]
    }

    /// Tests overlap with an axis-aligned box.
    ///
    /// Only the rectangle's own axes are used as separating axes: the box
    /// corners are projected onto `u` and `v` and the resulting intervals are
    /// compared against the half-extents. The world axes are not tested, so
    /// this over-reports near the rectangle's corners. That is tolerable for
    /// thin zones hugging a face boundary and is kept as-is because the zone
    /// feel depends on it.
    #[must_use]
    pub fn overlaps_aabb(&self, aabb: &Aabb) -> bool {
        let mut u_min = f64::INFINITY;
        let mut u_max = f64::NEG_INFINITY;
        let mut v_min = f64::INFINITY;
        let mut v_max = f64::NEG_INFINITY;
        for corner in &aabb.corners() {
            let (cu, cv) = self.to_local(corner);
            u_min = u_min.min(cu);
            u_max = u_max.max(cu);
            v_min = v_min.min(cv);
            v_max = v_max.max(cv);
        }
        u_max >= -self.half_width
            && u_min <= self.half_width
            && v_max >= -self.half_height
            && v_min <= self.half_height
    }
}
