mod build_travel_zones;
mod edge_triggers;

pub use build_travel_zones::BuildTravelZones;
pub use edge_triggers::EdgeTriggers;

use crate::geometry::{Edge, FaceId, OrientedRect};

/// Parameters controlling travel zone size.
#[derive(Debug, Clone, Copy)]
pub struct TriggerParams {
    /// Fraction of the edge covered by the zone, in `(0, 1]`. Also scales the
    /// thickness.
    pub trigger_scale: f64,
    /// Zone thickness across the edge before scaling.
    pub base_thickness: f64,
}

/// Default zone thickness before scaling.
///
/// A 20×20 player spawned 15% of the apothem inside an edge of a radius-140
/// face sits 17 px from the edge; its box reaches up to 14 px across a tilted
/// edge. The scaled half-thickness must stay under the remaining 3 px.
pub const DEFAULT_BASE_THICKNESS: f64 = 4.0;

impl Default for TriggerParams {
    fn default() -> Self {
        Self {
            trigger_scale: 0.85,
            base_thickness: DEFAULT_BASE_THICKNESS,
        }
    }
}

/// An oriented trigger rectangle along a traversable edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelZone {
    rect: OrientedRect,
    target: FaceId,
    edge: Edge,
}

impl TravelZone {
    /// Lays a zone along `edge`: centered on its midpoint, `u` along the edge,
    /// half-extents `len * scale / 2` by `thickness * scale / 2`.
    #[must_use]
    pub fn from_edge(edge: Edge, target: FaceId, params: &TriggerParams) -> Self {
        let rect = OrientedRect::new(
            edge.midpoint(),
            edge.direction(),
            edge.length() * params.trigger_scale * 0.5,
            params.base_thickness * params.trigger_scale * 0.5,
        );
        Self { rect, target, edge }
    }

    #[must_use]
    pub fn rect(&self) -> &OrientedRect {
        &self.rect
    }

    /// The face reached by walking off this edge.
    #[must_use]
    pub fn target(&self) -> &FaceId {
        &self.target
    }

    /// The face edge this zone was built from.
    #[must_use]
    pub fn edge(&self) -> &Edge {
        &self.edge
    }
}
