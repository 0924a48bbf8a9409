use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::polygon_bounds;
use crate::math::{Aabb, Point2, Vector2, TOLERANCE};

use super::Edge;

/// Number of vertices and edges of every face.
pub const EDGE_COUNT: usize = 5;

/// Angle of vertex 0, pointing straight up on a y-down screen.
const FIRST_VERTEX_ANGLE: f64 = -PI / 2.0;

/// Angular step between consecutive vertices (72°).
const VERTEX_STEP: f64 = 2.0 * PI / EDGE_COUNT as f64;

/// A regular pentagon: one walkable face of the dodecahedron world.
///
/// Vertex `i` sits at angle `-90° + i * 72°` around the center, so on screen
/// the vertices run clockwise starting from the top. Edge `i` joins vertex
/// `i` to vertex `i + 1`, wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    center: Point2,
    radius: f64,
    vertices: [Point2; EDGE_COUNT],
}

impl Face {
    /// Builds the pentagon around `center` with circumradius `radius`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the radius is not a positive finite
    /// number, the center is not finite, or two consecutive vertices
    /// coincide (a radius too small to resolve).
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius { radius }.into());
        }
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(GeometryError::NonFiniteCenter {
                x: center.x,
                y: center.y,
            }
            .into());
        }

        let vertices: [Point2; EDGE_COUNT] = std::array::from_fn(|i| {
            #[allow(clippy::cast_precision_loss)]
            let theta = FIRST_VERTEX_ANGLE + i as f64 * VERTEX_STEP;
            center + Vector2::new(theta.cos(), theta.sin()) * radius
        });

        for i in 0..EDGE_COUNT {
            let j = (i + 1) % EDGE_COUNT;
            if (vertices[j] - vertices[i]).norm() < TOLERANCE {
                return Err(GeometryError::CoincidentVertices {
                    first: i,
                    second: j,
                }
                .into());
            }
        }

        Ok(Self {
            center,
            radius,
            vertices,
        })
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Circumradius: center to vertex.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance from the center to every edge midpoint (apothem).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn inradius(&self) -> f64 {
        self.radius * (PI / EDGE_COUNT as f64).cos()
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2; EDGE_COUNT] {
        &self.vertices
    }

    /// Returns edge `index`, or `None` when `index >= 5`.
    #[must_use]
    pub fn edge(&self, index: usize) -> Option<Edge> {
        (index < EDGE_COUNT).then(|| {
            Edge::new(
                index,
                self.vertices[index],
                self.vertices[(index + 1) % EDGE_COUNT],
            )
        })
    }

    /// All five edges in vertex order.
    #[must_use]
    pub fn edges(&self) -> [Edge; EDGE_COUNT] {
        std::array::from_fn(|i| Edge::new(i, self.vertices[i], self.vertices[(i + 1) % EDGE_COUNT]))
    }

    /// Arithmetic mean of the five vertices.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Point2 {
        let sum = self
            .vertices
            .iter()
            .fold(Vector2::zeros(), |acc, v| acc + v.coords);
        Point2::from(sum / EDGE_COUNT as f64)
    }

    /// Axis-aligned bounds of the pentagon, e.g. for camera framing.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        polygon_bounds(&self.vertices).unwrap_or(Aabb {
            min: self.center,
            max: self.center,
        })
    }
}
