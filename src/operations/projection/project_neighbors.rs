use crate::error::{ProjectionError, Result};
use crate::geometry::{Edge, Face, EDGE_COUNT};
use crate::math::rotate_3d::{perspective_project, rotate_about_axis};
use crate::math::{Point2, Point3, Vector3};

use super::{NeighborProjection, ProjectionParams};

/// Folds the face about each of its edges and perspective-projects the result,
/// producing the five neighbor previews.
///
/// The face is placed in camera space with its center on the optical axis and
/// its plane at z = 0. The hinge of edge `i` runs from vertex `i + 1` back to
/// vertex `i`, so a negative tilt lifts the folded copy to positive z.
pub struct ProjectNeighbors {
    params: ProjectionParams,
}

impl ProjectNeighbors {
    /// Creates a projector with the dodecahedron tilt and default camera.
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: ProjectionParams::default(),
        }
    }

    /// Sets custom tilt and camera parameters.
    #[must_use]
    pub fn with_params(mut self, params: ProjectionParams) -> Self {
        self.params = params;
        self
    }

    /// Rotates the face about edge `edge_index` and returns the folded
    /// vertices in camera space, before projection. `None` if the index is out
    /// of range.
    #[must_use]
    pub fn fold_edge(&self, face: &Face, edge_index: usize) -> Option<[Point3; EDGE_COUNT]> {
        face.edge(edge_index)
            .map(|edge| fold(face, &edge, self.params.tilt))
    }

    /// Executes the projection for all five edges.
    ///
    /// The camera is checked once against the deepest folded vertex before
    /// anything is projected.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::CameraTooClose`] if `cam_z` is not finite or
    /// does not exceed the folded depth, which would invert the projection.
    pub fn execute(&self, face: &Face) -> Result<Vec<NeighborProjection>> {
        let folds: Vec<[Point3; EDGE_COUNT]> = face
            .edges()
            .iter()
            .map(|edge| fold(face, edge, self.params.tilt))
            .collect();

        let max_depth = folds
            .iter()
            .flatten()
            .map(|p| p.z)
            .fold(0.0_f64, f64::max);
        let cam_z = self.params.cam_z;
        if !cam_z.is_finite() || cam_z <= max_depth {
            return Err(ProjectionError::CameraTooClose { cam_z, max_depth }.into());
        }

        let origin = face.center().coords;
        Ok(folds
            .iter()
            .enumerate()
            .map(|(edge_index, folded)| NeighborProjection {
                edge_index,
                points: (*folded).map(|p| perspective_project(&p, cam_z) + origin),
            })
            .collect())
    }
}

impl Default for ProjectNeighbors {
    fn default() -> Self {
        Self::new()
    }
}

fn to_camera(point: &Point2, face: &Face) -> Point3 {
    let local = point - face.center();
    Point3::new(local.x, local.y, 0.0)
}

fn fold(face: &Face, edge: &Edge, tilt: f64) -> [Point3; EDGE_COUNT] {
    let pivot = to_camera(&edge.start(), face);
    let d = -edge.direction();
    let axis = Vector3::new(d.x, d.y, 0.0);
    (*face.vertices()).map(|v| rotate_about_axis(&to_camera(&v, face), &pivot, &axis, tilt))
}
