mod resolve_spawn;

pub use resolve_spawn::ResolveSpawn;

use crate::geometry::FaceId;
use crate::math::Point2;

/// Fraction of the way from the entry edge's midpoint toward the face
/// centroid at which a player arriving through that edge appears.
pub const SPAWN_INWARD_RATIO: f64 = 0.15;

/// Data handed to a face when it is entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnContext {
    /// The face the player just left, if the entry was a walk across an edge.
    pub came_from: Option<FaceId>,
    /// Explicit spawn coordinates, e.g. when returning from a puzzle scene.
    pub spawn_at: Option<Point2>,
}

impl SpawnContext {
    /// Context for walking in from `face`.
    #[must_use]
    pub fn came_from(face: FaceId) -> Self {
        Self {
            came_from: Some(face),
            spawn_at: None,
        }
    }

    /// Context placing the player at fixed coordinates.
    #[must_use]
    pub fn at(position: Point2) -> Self {
        Self {
            came_from: None,
            spawn_at: Some(position),
        }
    }
}

/// How a spawn point was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnSource {
    /// Coordinates were given explicitly.
    Explicit,
    /// Placed inward from the edge leading back to the departed face.
    Edge { edge_index: usize },
    /// Default placement at the face centroid.
    Centroid,
}

/// Resolved player placement for a freshly entered face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawn {
    pub position: Point2,
    pub source: SpawnSource,
}
