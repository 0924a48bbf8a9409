//! Composition of the navigation pieces for one face scene.
//!
//! The host builds a [`FaceNavigator`] when a face scene starts, feeds it the
//! player's box each frame, forwards the activate input, reads the hint and
//! draws the returned [`DrawCommand`]s.

mod config;
mod style;

pub use config::{FaceConfig, FaceExtension};
pub use style::{Color, DrawCommand, FaceStyle, Layer, Stroke};

use tracing::{debug, info};

use crate::error::Result;
use crate::geometry::{Face, FaceId};
use crate::interaction::InteractionRegistry;
use crate::math::{Aabb, Point2};
use crate::operations::projection::{NeighborProjection, ProjectNeighbors};
use crate::operations::spawn::{ResolveSpawn, Spawn, SpawnContext};
use crate::operations::trigger::{BuildTravelZones, EdgeTriggers, TravelZone};
use crate::state::StatePort;
use crate::world::EdgeTargets;

/// State key holding the id of the face the player is on.
pub const CURRENT_FACE_KEY: &str = "nav.current_face";

/// State key holding the id of the face the player last walked in from.
pub const CAME_FROM_KEY: &str = "nav.came_from";

/// Scene manager capability used by the travel entry.
pub trait SceneHost {
    /// Switches to the face scene `target`, which should then be entered with
    /// `context`.
    fn transition_to(&mut self, target: &FaceId, context: SpawnContext);
}

/// What the movement controller reports each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerFrame {
    pub bounds: Aabb,
    pub center: Point2,
}

impl PlayerFrame {
    /// Uses the center of `bounds` as the player position.
    #[must_use]
    pub fn from_bounds(bounds: Aabb) -> Self {
        Self {
            bounds,
            center: bounds.center(),
        }
    }
}

/// The travel edge the player currently stands on.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEdge {
    pub edge_index: usize,
    pub target: FaceId,
}

/// Per-frame probe handed to interaction predicates and callbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub position: Point2,
    pub active_edge: Option<ActiveEdge>,
}

/// Navigation state of the face scene the player is on.
pub struct FaceNavigator<H: ?Sized> {
    id: FaceId,
    face: Face,
    edge_targets: EdgeTargets,
    projections: Vec<NeighborProjection>,
    triggers: EdgeTriggers,
    interactions: InteractionRegistry<Frame, H>,
    spawn: Spawn,
    style: FaceStyle,
    frame: Frame,
}

impl<H: SceneHost + ?Sized + 'static> FaceNavigator<H> {
    /// Builds the face scene described by `config`.
    ///
    /// Registers the edge-travel interaction first and then lets the
    /// config's extension add its own, so travel outranks everything the
    /// extension registers. Records the current and departed face in `state`.
    ///
    /// # Errors
    ///
    /// Returns an error for degenerate face geometry, a camera too close to
    /// the folded neighbors, or invalid travel zone parameters. Nothing is
    /// built or recorded in that case.
    pub fn enter(
        config: FaceConfig<H>,
        context: &SpawnContext,
        state: &mut dyn StatePort,
    ) -> Result<Self> {
        let FaceConfig {
            id,
            center,
            radius,
            edge_targets,
            style,
            triggers,
            projection,
            travel_hint,
            extension,
        } = config;

        let face = Face::new(center, radius)?;
        let projections = ProjectNeighbors::new()
            .with_params(projection)
            .execute(&face)?;
        let zones = BuildTravelZones::new(&face, &edge_targets)
            .with_params(triggers)
            .execute()?;
        let spawn = ResolveSpawn::new(&face, &zones).execute(context);

        let mut interactions = InteractionRegistry::new();
        let from = id.clone();
        interactions.register(
            |frame: &Frame| frame.active_edge.is_some(),
            move |frame: &Frame, host: &mut H| {
                if let Some(edge) = &frame.active_edge {
                    info!(
                        from = from.as_str(),
                        to = edge.target.as_str(),
                        edge = edge.edge_index,
                        "travelling across edge"
                    );
                    host.transition_to(&edge.target, SpawnContext::came_from(from.clone()));
                }
            },
            Some(travel_hint),
        );
        if let Some(extend) = extension {
            extend(&face, &mut interactions);
        }

        state.set(CURRENT_FACE_KEY, id.as_str().into());
        if let Some(came_from) = &context.came_from {
            state.set(CAME_FROM_KEY, came_from.as_str().into());
        }

        debug!(
            face = id.as_str(),
            zones = zones.len(),
            interactions = interactions.len(),
            spawn_x = spawn.position.x,
            spawn_y = spawn.position.y,
            "entered face"
        );

        Ok(Self {
            id,
            face,
            edge_targets,
            projections,
            triggers: EdgeTriggers::new(zones),
            interactions,
            frame: Frame {
                position: spawn.position,
                active_edge: None,
            },
            spawn,
            style,
        })
    }

    /// Runs the per-frame pass: active travel edge first, then the
    /// interaction registry.
    pub fn update(&mut self, player: &PlayerFrame) -> &Frame {
        let active_edge = self.triggers.update(&player.bounds).map(|zone| ActiveEdge {
            edge_index: zone.edge().index(),
            target: zone.target().clone(),
        });
        self.frame = Frame {
            position: player.center,
            active_edge,
        };
        self.interactions.refresh(&self.frame);
        &self.frame
    }

    /// Forwards the activate input to the active interaction.
    pub fn activate(&mut self, host: &mut H) -> bool {
        self.interactions.activate(&self.frame, host)
    }
}

impl<H: ?Sized> FaceNavigator<H> {
    #[must_use]
    pub fn id(&self) -> &FaceId {
        &self.id
    }

    #[must_use]
    pub fn face(&self) -> &Face {
        &self.face
    }

    /// Where the player should be placed on entry.
    #[must_use]
    pub fn spawn(&self) -> Spawn {
        self.spawn
    }

    #[must_use]
    pub fn projections(&self) -> &[NeighborProjection] {
        &self.projections
    }

    #[must_use]
    pub fn zones(&self) -> &[TravelZone] {
        self.triggers.zones()
    }

    #[must_use]
    pub fn active_edge(&self) -> Option<&TravelZone> {
        self.triggers.active()
    }

    /// The probe from the last [`update`](Self::update).
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Registry for interactions added after entry.
    pub fn interactions_mut(&mut self) -> &mut InteractionRegistry<Frame, H> {
        &mut self.interactions
    }

    #[must_use]
    pub fn interactions(&self) -> &InteractionRegistry<Frame, H> {
        &self.interactions
    }

    /// HUD hint for this frame.
    #[must_use]
    pub fn hint<'a>(&'a self, default: &'a str) -> &'a str {
        self.interactions.hint(default)
    }

    /// Polygons to draw this frame: folded neighbors, the face, then zone
    /// highlights. Zones are emitted every frame whether or not they changed.
    #[must_use]
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let style = &self.style;
        let mut commands = Vec::with_capacity(self.projections.len() + 1 + self.zones().len());

        for projection in &self.projections {
            let target = self.edge_targets[projection.edge_index].as_ref();
            commands.push(DrawCommand {
                layer: Layer::Neighbors,
                points: projection.points.to_vec(),
                fill: Some(style.neighbor_color(target)),
                stroke: Some(style.neighbor_stroke),
            });
        }

        commands.push(DrawCommand {
            layer: Layer::Face,
            points: self.face.vertices().to_vec(),
            fill: Some(style.face_fill),
            stroke: Some(style.face_stroke),
        });

        for (zone, active) in self.triggers.zone_visuals() {
            let (fill, stroke) = if active {
                (Some(style.zone_active_fill), style.zone_active_stroke)
            } else {
                (None, style.zone_idle)
            };
            commands.push(DrawCommand {
                layer: Layer::ZoneHighlight,
                points: zone.rect().corners().to_vec(),
                fill,
                stroke: Some(stroke),
            });
        }

        commands
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::{GeometryError, NavError};
    use crate::math::Vector2;
    use crate::operations::spawn::SpawnSource;
    use crate::state::{MemoryState, StateValue};
    use crate::world::WorldMap;

    #[derive(Default)]
    struct Host {
        transitions: Vec<(FaceId, SpawnContext)>,
        talked: usize,
    }

    impl SceneHost for Host {
        fn transition_to(&mut self, target: &FaceId, context: SpawnContext) {
            self.transitions.push((target.clone(), context));
        }
    }

    fn config(id: &str) -> FaceConfig<Host> {
        FaceConfig::from_world(
            &WorldMap::dodecahedron(),
            id.into(),
            Point2::new(480.0, 270.0),
            140.0,
        )
        .unwrap()
    }

    fn player_at(center: Point2) -> PlayerFrame {
        PlayerFrame::from_bounds(Aabb::from_center(center, 20.0, 20.0))
    }

    #[test]
    fn enter_builds_everything_and_records_state() {
        let mut state = MemoryState::new();
        let nav = FaceNavigator::enter(config("face-1"), &SpawnContext::default(), &mut state)
            .unwrap();
        assert_eq!(nav.projections().len(), 5);
        assert_eq!(nav.zones().len(), 5);
        assert_eq!(nav.spawn().source, SpawnSource::Centroid);
        assert_eq!(
            state.get(CURRENT_FACE_KEY),
            Some(&StateValue::Text("face-1".into()))
        );
        assert!(state.get(CAME_FROM_KEY).is_none());
    }

    #[test]
    fn degenerate_face_builds_nothing() {
        let mut state = MemoryState::new();
        let cfg = FaceConfig::<Host>::new("broken".into(), Point2::new(0.0, 0.0), 0.0);
        let result = FaceNavigator::enter(cfg, &SpawnContext::default(), &mut state);
        assert!(matches!(
            result,
            Err(NavError::Geometry(GeometryError::NonPositiveRadius { .. }))
        ));
        assert!(state.get(CURRENT_FACE_KEY).is_none());
    }

    #[test]
    fn standing_on_an_edge_offers_travel() {
        let mut state = MemoryState::new();
        let mut nav =
            FaceNavigator::enter(config("face-0"), &SpawnContext::default(), &mut state).unwrap();
        let edge = nav.face().edge(2).unwrap();

        let frame = nav.update(&player_at(edge.midpoint())).clone();
        let active = frame.active_edge.unwrap();
        assert_eq!(active.edge_index, 2);
        assert_eq!(active.target.as_str(), "face-3");
        assert_eq!(nav.hint("Explore"), "Walk to the neighboring face");

        let mut host = Host::default();
        assert!(nav.activate(&mut host));
        assert_eq!(
            host.transitions,
            vec![(
                FaceId::from("face-3"),
                SpawnContext::came_from("face-0".into())
            )]
        );
    }

    #[test]
    fn center_of_face_offers_nothing() {
        let mut state = MemoryState::new();
        let mut nav =
            FaceNavigator::enter(config("face-0"), &SpawnContext::default(), &mut state).unwrap();
        let center = nav.face().center();
        nav.update(&player_at(center));
        assert_eq!(nav.hint("Explore"), "Explore");
        let mut host = Host::default();
        assert!(!nav.activate(&mut host));
        assert!(host.transitions.is_empty());
    }

    #[test]
    fn walking_across_lands_near_the_matching_edge() {
        let mut state = MemoryState::new();
        let mut host = Host::default();
        let mut nav =
            FaceNavigator::enter(config("face-0"), &SpawnContext::default(), &mut state).unwrap();
        let edge = nav.face().edge(0).unwrap();
        nav.update(&player_at(edge.midpoint()));
        nav.activate(&mut host);

        let (target, context) = host.transitions.pop().unwrap();
        let next = FaceNavigator::<Host>::enter(config(target.as_str()), &context, &mut state)
            .unwrap();
        let back = next
            .zones()
            .iter()
            .find(|z| z.target().as_str() == "face-0")
            .unwrap();
        let m = back.edge().midpoint();
        let c = next.face().centroid();
        assert_eq!(
            next.spawn().source,
            SpawnSource::Edge {
                edge_index: back.edge().index()
            }
        );
        assert_relative_eq!(next.spawn().position, m + (c - m) * 0.15, epsilon = 1e-9);
        assert_eq!(
            state.get(CAME_FROM_KEY).and_then(StateValue::as_text),
            Some("face-0")
        );
    }

    #[test]
    fn extension_entries_rank_after_travel() {
        let mut state = MemoryState::new();
        let npc = Point2::new(480.0, 300.0);
        let cfg = config("face-0").with_extension(move |_face, registry| {
            registry.register(
                move |frame: &Frame| (frame.position - npc).norm() < 200.0,
                |_, host: &mut Host| host.talked += 1,
                Some("Talk".into()),
            );
        });
        let mut nav = FaceNavigator::enter(cfg, &SpawnContext::default(), &mut state).unwrap();
        let mut host = Host::default();

        nav.update(&player_at(npc + Vector2::new(0.0, 10.0)));
        assert_eq!(nav.hint(""), "Talk");
        nav.activate(&mut host);
        assert_eq!(host.talked, 1);

        let edge = nav.face().edge(2).unwrap();
        nav.update(&player_at(edge.midpoint()));
        assert_eq!(nav.hint(""), "Walk to the neighboring face");
        nav.activate(&mut host);
        assert_eq!(host.talked, 1);
        assert_eq!(host.transitions.len(), 1);
    }

    #[test]
    fn draw_commands_layer_neighbors_face_and_zones() {
        let mut state = MemoryState::new();
        let mut nav =
            FaceNavigator::enter(config("face-0"), &SpawnContext::default(), &mut state).unwrap();
        let edge = nav.face().edge(1).unwrap();
        nav.update(&player_at(edge.midpoint()));

        let commands = nav.draw_commands();
        assert_eq!(commands.len(), 5 + 1 + 5);
        assert!(commands[..5].iter().all(|c| c.layer == Layer::Neighbors));
        assert_eq!(commands[5].layer, Layer::Face);
        let highlighted: Vec<bool> = commands[6..].iter().map(|c| c.fill.is_some()).collect();
        assert_eq!(highlighted, vec![false, true, false, false, false]);
    }
}
