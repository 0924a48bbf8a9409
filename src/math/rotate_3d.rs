use super::{Point2, Point3, Vector3};

/// Rotates `point` about the line through `pivot` along the unit `axis` by
/// `angle` radians (Rodrigues).
///
/// `v' = v cos θ + (axis × v) sin θ + axis (axis · v)(1 − cos θ)` with `v`
/// taken relative to `pivot`. The axis must already be normalized.
#[must_use]
pub fn rotate_about_axis(point: &Point3, pivot: &Point3, axis: &Vector3, angle: f64) -> Point3 {
    let (s, c) = angle.sin_cos();
    let v = point - pivot;
    let rotated = v * c + axis.cross(&v) * s + axis * axis.dot(&v) * (1.0 - c);
    pivot + rotated
}

/// Perspective-projects a camera-space point onto the z = 0 plane with the
/// eye at distance `cam_z`.
///
/// Callers guarantee `cam_z > point.z`; see
/// [`ProjectNeighbors`](crate::operations::projection::ProjectNeighbors).
#[must_use]
pub fn perspective_project(point: &Point3, cam_z: f64) -> Point2 {
    let scale = cam_z / (cam_z - point.z);
    Point2::new(point.x * scale, point.y * scale)
}
