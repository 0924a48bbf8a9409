use tracing::debug;

use crate::math::Aabb;

use super::TravelZone;

/// Per-frame arbitration of which travel zone the player stands in.
///
/// The active zone is recomputed from scratch on every [`update`]. All zones
/// are tested in order and every hit overwrites the pointer, so when zones
/// overlap each other the last one in order wins.
///
/// [`update`]: EdgeTriggers::update
#[derive(Debug, Clone, Default)]
pub struct EdgeTriggers {
    zones: Vec<TravelZone>,
    overlapping: Vec<bool>,
    active: Option<usize>,
}

impl EdgeTriggers {
    #[must_use]
    pub fn new(zones: Vec<TravelZone>) -> Self {
        let overlapping = vec![false; zones.len()];
        Self {
            zones,
            overlapping,
            active: None,
        }
    }

    /// Tests the player's box against every zone and returns the active one.
    pub fn update(&mut self, player: &Aabb) -> Option<&TravelZone> {
        let previous = self.active.take();
        for (i, zone) in self.zones.iter().enumerate() {
            let hit = zone.rect().overlaps_aabb(player);
            self.overlapping[i] = hit;
            if hit {
                self.active = Some(i);
            }
        }
        if self.active != previous {
            debug!(
                edge = self.active.map(|i| self.zones[i].edge().index()),
                target = self.active.map(|i| self.zones[i].target().as_str()),
                "active travel edge changed"
            );
        }
        self.active()
    }

    /// The zone selected by the last [`update`](Self::update).
    #[must_use]
    pub fn active(&self) -> Option<&TravelZone> {
        self.active.map(|i| &self.zones[i])
    }

    /// Position of the active zone in [`zones`](Self::zones).
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn zones(&self) -> &[TravelZone] {
        &self.zones
    }

    /// Every zone with its overlap flag from the last update, for the
    /// highlight pass. Yields all zones regardless of change.
    pub fn zone_visuals(&self) -> impl Iterator<Item = (&TravelZone, bool)> {
        self.zones.iter().zip(self.overlapping.iter().copied())
    }
}
