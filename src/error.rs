use thiserror::Error;

use crate::geometry::FaceId;

/// Top-level error type for the face navigation engine.
#[derive(Debug, Error)]
pub enum NavError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Degenerate geometry rejected when a face is built.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("face radius must be positive and finite, got {radius}")]
    NonPositiveRadius { radius: f64 },

    #[error("face center ({x}, {y}) is not finite")]
    NonFiniteCenter { x: f64, y: f64 },

    #[error("vertices {first} and {second} coincide")]
    CoincidentVertices { first: usize, second: usize },
}

/// Errors related to the neighbor projection camera.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("camera distance {cam_z} must be finite and exceed folded depth {max_depth}")]
    CameraTooClose { cam_z: f64, max_depth: f64 },
}

/// Errors related to navigation parameters and world layout.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parameter {parameter} = {value} is invalid: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("travel zone half-height {half_height} reaches past face inradius {inradius}")]
    ZoneExceedsFace { half_height: f64, inradius: f64 },

    #[error("unknown face: {0}")]
    UnknownFace(FaceId),

    #[error("edge {from} -> {to} has no matching edge back")]
    NonReciprocalEdge { from: FaceId, to: FaceId },
}

/// Convenience type alias for results using [`NavError`].
pub type Result<T> = std::result::Result<T, NavError>;
