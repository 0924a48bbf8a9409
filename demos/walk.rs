//! Console walkthrough of the dodecahedron world.
//!
//! Walks the player from face to face along a fixed route, printing the HUD
//! hint each step and the spawn point after every crossing.
//!
//! ```text
//! cargo run --example walk
//! RUST_LOG=dodecanav=debug cargo run --example walk
//! ```

use dodecanav::geometry::FaceId;
use dodecanav::math::{Aabb, Point2};
use dodecanav::navigator::{FaceConfig, FaceNavigator, Frame, PlayerFrame, SceneHost};
use dodecanav::operations::spawn::SpawnContext;
use dodecanav::state::{MemoryState, StatePort, StateValue};
use dodecanav::world::WorldMap;

const CENTER: (f64, f64) = (480.0, 270.0);
const RADIUS: f64 = 140.0;
const PLAYER_SIZE: f64 = 20.0;
const STEPS: u32 = 8;

/// Edge taken on each successive face.
const ROUTE: [usize; 6] = [2, 3, 1, 0, 4, 2];

#[derive(Default)]
struct Scenes {
    pending: Option<(FaceId, SpawnContext)>,
}

impl SceneHost for Scenes {
    fn transition_to(&mut self, target: &FaceId, context: SpawnContext) {
        self.pending = Some((target.clone(), context));
    }
}

fn enter(
    world: &WorldMap,
    id: FaceId,
    context: &SpawnContext,
    state: &mut MemoryState,
) -> dodecanav::Result<FaceNavigator<Scenes>> {
    let center = Point2::new(CENTER.0, CENTER.1);
    let config = FaceConfig::<Scenes>::from_world(world, id, center, RADIUS)?;
    let config = config.with_extension(|face, registry| {
        let signpost = face.centroid();
        registry.register(
            move |frame: &Frame| (frame.position - signpost).norm() < 30.0,
            |_, _: &mut Scenes| println!("    the signpost reads: \"all faces lead somewhere\""),
            Some("Read the signpost".to_owned()),
        );
    });
    FaceNavigator::enter(config, context, state)
}

fn main() -> dodecanav::Result<()> {
    // Default: WARN for everything, INFO for dodecanav.
    // Override with RUST_LOG (e.g. RUST_LOG=dodecanav=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("dodecanav=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let world = WorldMap::dodecahedron();
    world.validate()?;

    let mut state = MemoryState::new();
    state.subscribe(
        "nav.current_face",
        Box::new(|v: &StateValue| println!("now on {v}")),
    );

    let mut scenes = Scenes::default();
    let mut nav = enter(&world, "face-0".into(), &SpawnContext::default(), &mut state)?;

    for &edge_index in &ROUTE {
        let start = nav.spawn().position;
        println!("  spawned at ({:.1}, {:.1})", start.x, start.y);

        let Some(edge) = nav.face().edge(edge_index) else {
            break;
        };
        let goal = edge.midpoint();
        for step in 1..=STEPS {
            let t = f64::from(step) / f64::from(STEPS);
            let position = start + (goal - start) * t;
            let frame = nav.update(&PlayerFrame::from_bounds(Aabb::from_center(
                position,
                PLAYER_SIZE,
                PLAYER_SIZE,
            )));
            let on_edge = frame.active_edge.is_some();
            println!(
                "  step {step}: ({:.1}, {:.1}) {}{}",
                position.x,
                position.y,
                nav.hint("Explore"),
                if on_edge { " [edge]" } else { "" }
            );
        }

        nav.activate(&mut scenes);
        let Some((target, context)) = scenes.pending.take() else {
            println!("  no edge under the player; stopping");
            break;
        };
        nav = enter(&world, target, &context, &mut state)?;
    }

    Ok(())
}
