use crate::error::{ConfigError, Result};
use crate::geometry::{Face, FaceId};
use crate::interaction::InteractionRegistry;
use crate::math::Point2;
use crate::operations::projection::ProjectionParams;
use crate::operations::trigger::TriggerParams;
use crate::world::{EdgeTargets, WorldMap};

use super::{FaceStyle, Frame};

/// One-shot per-face hook run after the navigator's own entries are
/// registered; used to add NPCs and props.
pub type FaceExtension<H> = Box<dyn FnOnce(&Face, &mut InteractionRegistry<Frame, H>)>;

/// Everything needed to build one face scene.
///
/// Faces differ only by data and an optional extension hook; there is a
/// single navigator type for all of them.
pub struct FaceConfig<H: ?Sized> {
    pub id: FaceId,
    pub center: Point2,
    pub radius: f64,
    pub edge_targets: EdgeTargets,
    pub style: FaceStyle,
    pub triggers: TriggerParams,
    pub projection: ProjectionParams,
    /// HUD hint shown while standing on a travel edge.
    pub travel_hint: String,
    pub extension: Option<FaceExtension<H>>,
}

impl<H: ?Sized> FaceConfig<H> {
    /// Creates a config with no traversable edges and default parameters.
    #[must_use]
    pub fn new(id: FaceId, center: Point2, radius: f64) -> Self {
        Self {
            id,
            center,
            radius,
            edge_targets: EdgeTargets::default(),
            style: FaceStyle::default(),
            triggers: TriggerParams::default(),
            projection: ProjectionParams::default(),
            travel_hint: "Walk to the neighboring face".to_owned(),
            extension: None,
        }
    }

    /// Creates a config whose edge targets come from `world`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFace`] if `id` is not in the map.
    pub fn from_world(world: &WorldMap, id: FaceId, center: Point2, radius: f64) -> Result<Self> {
        let targets = world
            .edge_targets(&id)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownFace(id.clone()))?;
        Ok(Self::new(id, center, radius).with_edge_targets(targets))
    }

    #[must_use]
    pub fn with_edge_targets(mut self, targets: EdgeTargets) -> Self {
        self.edge_targets = targets;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: FaceStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_trigger_params(mut self, params: TriggerParams) -> Self {
        self.triggers = params;
        self
    }

    #[must_use]
    pub fn with_projection_params(mut self, params: ProjectionParams) -> Self {
        self.projection = params;
        self
    }

    #[must_use]
    pub fn with_travel_hint(mut self, hint: impl Into<String>) -> Self {
        self.travel_hint = hint.into();
        self
    }

    #[must_use]
    pub fn with_extension(
        mut self,
        extension: impl FnOnce(&Face, &mut InteractionRegistry<Frame, H>) + 'static,
    ) -> Self {
        self.extension = Some(Box::new(extension));
        self
    }
}
