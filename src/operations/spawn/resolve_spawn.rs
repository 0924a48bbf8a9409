use tracing::warn;

use crate::geometry::Face;
use crate::math::TOLERANCE;
use crate::operations::trigger::TravelZone;

use super::{Spawn, SpawnContext, SpawnSource, SPAWN_INWARD_RATIO};

/// Chooses where the player appears when a face is entered.
///
/// Explicit coordinates win. Otherwise, if the departed face is the target of
/// one of this face's zones, the player appears a short way inside that edge
/// so walking across feels continuous. Everything else lands on the centroid.
pub struct ResolveSpawn<'a> {
    face: &'a Face,
    zones: &'a [TravelZone],
}

impl<'a> ResolveSpawn<'a> {
    #[must_use]
    pub fn new(face: &'a Face, zones: &'a [TravelZone]) -> Self {
        Self { face, zones }
    }

    /// Executes the resolution. Never fails: an unmatched departed face is
    /// logged and falls back to the centroid.
    #[must_use]
    pub fn execute(&self, context: &SpawnContext) -> Spawn {
        if let Some(position) = context.spawn_at {
            return Spawn {
                position,
                source: SpawnSource::Explicit,
            };
        }

        let centroid = self.face.centroid();
        let centroid_spawn = Spawn {
            position: centroid,
            source: SpawnSource::Centroid,
        };

        let Some(came_from) = &context.came_from else {
            return centroid_spawn;
        };
        let Some(zone) = self.zones.iter().find(|z| z.target() == came_from) else {
            warn!(
                came_from = came_from.as_str(),
                "no edge leads back to the departed face; spawning at centroid"
            );
            return centroid_spawn;
        };

        let edge = zone.edge();
        let midpoint = edge.midpoint();
        let inward = centroid - midpoint;
        if inward.norm() < TOLERANCE {
            return Spawn {
                position: centroid,
                source: SpawnSource::Edge {
                    edge_index: edge.index(),
                },
            };
        }
        Spawn {
            position: midpoint + inward * SPAWN_INWARD_RATIO,
            source: SpawnSource::Edge {
                edge_index: edge.index(),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{FaceId, EDGE_COUNT};
    use crate::math::{Aabb, Point2};
    use crate::operations::trigger::{BuildTravelZones, EdgeTriggers};

    fn scene_face() -> Face {
        Face::new(Point2::new(480.0, 270.0), 140.0).unwrap()
    }

    fn targets() -> [Option<FaceId>; EDGE_COUNT] {
        [
            Some("a".into()),
            Some("b".into()),
            None,
            Some("c".into()),
            Some("d".into()),
        ]
    }

    #[test]
    fn explicit_coordinates_win() {
        let face = scene_face();
        let targets = targets();
        let zones = BuildTravelZones::new(&face, &targets).execute().unwrap();
        let context = SpawnContext {
            came_from: Some("a".into()),
            spawn_at: Some(Point2::new(10.0, 20.0)),
        };
        let spawn = ResolveSpawn::new(&face, &zones).execute(&context);
        assert_eq!(spawn.source, SpawnSource::Explicit);
        assert_eq!(spawn.position, Point2::new(10.0, 20.0));
    }

    #[test]
    fn entering_from_a_neighbor_lands_near_its_edge() {
        let face = scene_face();
        let targets = targets();
        let zones = BuildTravelZones::new(&face, &targets).execute().unwrap();
        let spawn = ResolveSpawn::new(&face, &zones).execute(&SpawnContext::came_from("c".into()));

        assert_eq!(spawn.source, SpawnSource::Edge { edge_index: 3 });
        let m = face.edge(3).unwrap().midpoint();
        let c = face.centroid();
        assert_relative_eq!(spawn.position, m + (c - m) * 0.15, epsilon = 1e-9);
        assert!((spawn.position - m).norm() < (c - m).norm());
    }

    #[test]
    fn player_body_at_spawn_is_clear_of_every_zone() {
        let face = scene_face();
        let targets: [Option<FaceId>; EDGE_COUNT] =
            std::array::from_fn(|i| Some(format!("n{i}").into()));
        let zones = BuildTravelZones::new(&face, &targets).execute().unwrap();
        let mut triggers = EdgeTriggers::new(zones.clone());
        for target in &targets {
            let target = target.clone().unwrap();
            let spawn =
                ResolveSpawn::new(&face, &zones).execute(&SpawnContext::came_from(target.clone()));
            let body = Aabb::from_center(spawn.position, 20.0, 20.0);
            assert!(
                triggers.update(&body).is_none(),
                "20x20 body at spawn overlaps a zone when entering from {target}"
            );
        }
    }

    #[test]
    fn spawn_clearance_holds_on_tilted_edges() {
        let face = scene_face();
        let targets: [Option<FaceId>; EDGE_COUNT] =
            std::array::from_fn(|i| Some(format!("n{i}").into()));
        let zones = BuildTravelZones::new(&face, &targets).execute().unwrap();
        for zone in &zones {
            let rect = zone.rect();
            let v = rect.v();
            let body_reach = 10.0 * (v.x.abs() + v.y.abs());
            let spawn = ResolveSpawn::new(&face, &zones)
                .execute(&SpawnContext::came_from(zone.target().clone()));
            let (_, across) = rect.to_local(&spawn.position);
            assert!(
                rect.half_height() + body_reach < across.abs(),
                "edge {} leaves no clearance",
                zone.edge().index()
            );
        }
    }

    #[test]
    fn unknown_origin_falls_back_to_centroid() {
        let face = scene_face();
        let targets = targets();
        let zones = BuildTravelZones::new(&face, &targets).execute().unwrap();
        let spawn =
            ResolveSpawn::new(&face, &zones).execute(&SpawnContext::came_from("puzzle".into()));
        assert_eq!(spawn.source, SpawnSource::Centroid);
        assert_relative_eq!(spawn.position, face.centroid());
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unknown_origin_is_logged_for_content_authors() {
        let face = scene_face();
        let targets = targets();
        let zones = BuildTravelZones::new(&face, &targets).execute().unwrap();

        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let resolver = ResolveSpawn::new(&face, &zones);
            let _ = resolver.execute(&SpawnContext::came_from("puzzle".into()));
            let _ = resolver.execute(&SpawnContext::came_from("a".into()));
        });

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.lines().count(), 1, "{output}");
        assert!(output.contains("WARN"));
        assert!(output.contains("came_from=\"puzzle\""), "{output}");
    }

    #[test]
    fn empty_context_uses_centroid() {
        let face = scene_face();
        let spawn = ResolveSpawn::new(&face, &[]).execute(&SpawnContext::default());
        assert_eq!(spawn.source, SpawnSource::Centroid);
    }
}
