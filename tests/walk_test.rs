#![allow(clippy::unwrap_used)]

use dodecanav::geometry::FaceId;
use dodecanav::math::{Aabb, Point2};
use dodecanav::navigator::{FaceConfig, FaceNavigator, PlayerFrame, SceneHost};
use dodecanav::operations::spawn::{SpawnContext, SpawnSource};
use dodecanav::state::{MemoryState, StatePort, StateValue};
use dodecanav::world::WorldMap;

const CENTER: (f64, f64) = (480.0, 270.0);
const RADIUS: f64 = 140.0;

#[derive(Default)]
struct Host {
    pending: Option<(FaceId, SpawnContext)>,
}

impl SceneHost for Host {
    fn transition_to(&mut self, target: &FaceId, context: SpawnContext) {
        self.pending = Some((target.clone(), context));
    }
}

fn enter(
    world: &WorldMap,
    id: &FaceId,
    context: &SpawnContext,
    state: &mut MemoryState,
) -> FaceNavigator<Host> {
    let config =
        FaceConfig::from_world(world, id.clone(), Point2::new(CENTER.0, CENTER.1), RADIUS).unwrap();
    FaceNavigator::enter(config, context, state).unwrap()
}

fn body(center: Point2) -> PlayerFrame {
    PlayerFrame::from_bounds(Aabb::from_center(center, 20.0, 20.0))
}

#[test]
fn round_trip_across_every_edge_of_the_top_face() {
    let world = WorldMap::dodecahedron();
    world.validate().unwrap();
    let mut state = MemoryState::new();
    let top = FaceId::from("face-0");

    for edge_index in 0..5 {
        let mut host = Host::default();
        let mut nav = enter(&world, &top, &SpawnContext::default(), &mut state);
        let edge = nav.face().edge(edge_index).unwrap();
        nav.update(&body(edge.midpoint()));
        assert!(nav.activate(&mut host));

        let (next_id, context) = host.pending.take().unwrap();
        let mut next = enter(&world, &next_id, &context, &mut state);
        let spawn = next.spawn();
        assert!(matches!(spawn.source, SpawnSource::Edge { .. }));

        // The player's body at the spawn point is clear of every travel zone.
        let frame = next.update(&body(spawn.position));
        assert!(frame.active_edge.is_none(), "spawned on an edge of {next_id}");
        assert_eq!(next.hint("Explore"), "Explore");

        // Walking back out through the spawn edge returns to the top face.
        let SpawnSource::Edge { edge_index: back } = spawn.source else {
            unreachable!()
        };
        let back_edge = next.face().edge(back).unwrap();
        next.update(&body(back_edge.midpoint()));
        assert!(next.activate(&mut host));
        let (returned, context) = host.pending.take().unwrap();
        assert_eq!(returned, top);
        assert_eq!(context.came_from.as_ref(), Some(&next_id));
    }

    assert_eq!(
        state.get("nav.current_face").and_then(StateValue::as_text),
        Some("face-5")
    );
    assert_eq!(
        state.get("nav.came_from").and_then(StateValue::as_text),
        Some("face-0")
    );
}

#[test]
fn explicit_spawn_overrides_edge_continuity() {
    let world = WorldMap::dodecahedron();
    let mut state = MemoryState::new();
    let context = SpawnContext {
        came_from: Some("face-0".into()),
        spawn_at: Some(Point2::new(500.0, 280.0)),
    };
    let nav = enter(&world, &"face-1".into(), &context, &mut state);
    assert_eq!(nav.spawn().source, SpawnSource::Explicit);
    assert_eq!(nav.spawn().position, Point2::new(500.0, 280.0));
}

#[test]
fn non_adjacent_origin_spawns_at_centroid() {
    let world = WorldMap::dodecahedron();
    let mut state = MemoryState::new();
    let nav = enter(
        &world,
        &"face-0".into(),
        &SpawnContext::came_from("face-11".into()),
        &mut state,
    );
    assert_eq!(nav.spawn().source, SpawnSource::Centroid);
}
