use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::geometry::{Face, FaceId, EDGE_COUNT};

use super::{TravelZone, TriggerParams};

/// Builds one travel zone per edge that has a declared target.
///
/// Edges whose target is `None` are decorative and get no zone.
pub struct BuildTravelZones<'a> {
    face: &'a Face,
    targets: &'a [Option<FaceId>; EDGE_COUNT],
    params: TriggerParams,
}

impl<'a> BuildTravelZones<'a> {
    /// Creates a new `BuildTravelZones` operation with default parameters.
    #[must_use]
    pub fn new(face: &'a Face, targets: &'a [Option<FaceId>; EDGE_COUNT]) -> Self {
        Self {
            face,
            targets,
            params: TriggerParams::default(),
        }
    }

    /// Sets custom zone parameters.
    #[must_use]
    pub fn with_params(mut self, params: TriggerParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning zones in edge order.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the scale is outside `(0, 1]`, the
    /// thickness is not positive, or a zone would reach past the face center.
    /// The overlap test only uses the zone's own axes, so zones must stay
    /// inside the face for it to hold.
    pub fn execute(&self) -> Result<Vec<TravelZone>> {
        let TriggerParams {
            trigger_scale,
            base_thickness,
        } = self.params;

        if !(trigger_scale > 0.0 && trigger_scale <= 1.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "trigger_scale",
                value: trigger_scale,
                reason: "must lie in (0, 1]",
            }
            .into());
        }
        if !(base_thickness > 0.0 && base_thickness.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                parameter: "base_thickness",
                value: base_thickness,
                reason: "must be positive",
            }
            .into());
        }
        let half_height = base_thickness * trigger_scale * 0.5;
        let inradius = self.face.inradius();
        if half_height >= inradius {
            return Err(ConfigError::ZoneExceedsFace {
                half_height,
                inradius,
            }
            .into());
        }

        let zones: Vec<TravelZone> = self
            .face
            .edges()
            .into_iter()
            .zip(self.targets)
            .filter_map(|(edge, target)| {
                target
                    .as_ref()
                    .map(|t| TravelZone::from_edge(edge, t.clone(), &self.params))
            })
            .collect();

        debug!(zones = zones.len(), half_height, "built travel zones");
        Ok(zones)
    }
}
