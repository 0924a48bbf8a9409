//! Static adjacency of the dodecahedron world: which face each edge leads to.

use std::collections::BTreeMap;

use crate::error::{ConfigError, Result};
use crate::geometry::{FaceId, EDGE_COUNT};

/// Edge-to-target table for one face.
pub type EdgeTargets = [Option<FaceId>; EDGE_COUNT];

/// Number of faces of a dodecahedron.
pub const FACE_COUNT: usize = 12;

/// Edge targets of every face in the world.
#[derive(Debug, Clone, Default)]
pub struct WorldMap {
    faces: BTreeMap<FaceId, EdgeTargets>,
}

impl WorldMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full 12-face layout: a top face, an upper ring of five, a lower
    /// ring of five and a bottom face, named `face-0` to `face-11`.
    #[must_use]
    pub fn dodecahedron() -> Self {
        let id = |n: usize| FaceId::from(format!("face-{n}"));
        let upper = |i: usize| id(1 + i % 5);
        let lower = |i: usize| id(6 + i % 5);

        let mut map = Self::new();
        map.insert(id(0), std::array::from_fn(|i| Some(upper(i))));
        for i in 0..5 {
            map.insert(
                upper(i),
                [
                    Some(id(0)),
                    Some(upper(i + 1)),
                    Some(lower(i)),
                    Some(lower(i + 4)),
                    Some(upper(i + 4)),
                ],
            );
            map.insert(
                lower(i),
                [
                    Some(id(11)),
                    Some(lower(i + 1)),
                    Some(upper(i + 1)),
                    Some(upper(i)),
                    Some(lower(i + 4)),
                ],
            );
        }
        map.insert(id(11), std::array::from_fn(|i| Some(lower(i))));
        map
    }

    /// Adds or replaces a face's edge targets.
    pub fn insert(&mut self, face: FaceId, targets: EdgeTargets) {
        self.faces.insert(face, targets);
    }

    #[must_use]
    pub fn edge_targets(&self, face: &FaceId) -> Option<&EdgeTargets> {
        self.faces.get(face)
    }

    /// Face ids in sorted order.
    pub fn faces(&self) -> impl Iterator<Item = &FaceId> {
        self.faces.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Checks that every edge target names a known face and that every
    /// crossing can be walked back, which spawn continuity relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFace`] for a dangling target and
    /// [`ConfigError::NonReciprocalEdge`] for a one-way edge.
    pub fn validate(&self) -> Result<()> {
        for (from, targets) in &self.faces {
            for to in targets.iter().flatten() {
                let back = self
                    .faces
                    .get(to)
                    .ok_or_else(|| ConfigError::UnknownFace(to.clone()))?;
                if !back.iter().flatten().any(|t| t == from) {
                    return Err(ConfigError::NonReciprocalEdge {
                        from: from.clone(),
                        to: to.clone(),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}
