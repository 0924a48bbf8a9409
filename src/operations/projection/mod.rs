mod project_neighbors;

pub use project_neighbors::ProjectNeighbors;

use crate::geometry::EDGE_COUNT;
use crate::math::Point2;

/// Dihedral angle of a regular dodecahedron, `acos(-1/√5)` ≈ 116.565°, in
/// radians.
pub const DODECAHEDRON_DIHEDRAL: f64 = 2.034_443_935_795_703;

/// Parameters controlling the folded neighbor preview.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionParams {
    /// Rotation about each edge hinge, in radians. Zero leaves the face flat.
    pub tilt: f64,
    /// Eye distance of the perspective camera above the face plane.
    pub cam_z: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            tilt: -DODECAHEDRON_DIHEDRAL,
            cam_z: 900.0,
        }
    }
}

/// The face folded about one of its edges and projected back to the screen.
///
/// Purely decorative: never collidable or interactive.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborProjection {
    /// Index of the hinge edge in the source face.
    pub edge_index: usize,
    /// Projected vertices, in the source face's vertex order.
    pub points: [Point2; EDGE_COUNT],
}
