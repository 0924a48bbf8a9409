use std::collections::HashMap;

use crate::geometry::FaceId;
use crate::math::Point2;

/// An RGB color with opacity, `0xRRGGBB` plus alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub rgb: u32,
    pub alpha: f32,
}

impl Color {
    /// Opaque color.
    #[must_use]
    pub const fn rgb(rgb: u32) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}

/// Outline paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
}

/// Paints used for a face scene. Colors carry no gameplay meaning.
#[derive(Debug, Clone)]
pub struct FaceStyle {
    pub face_fill: Color,
    pub face_stroke: Stroke,
    /// Neighbor fill keyed by the face its edge leads to.
    pub neighbor_palette: HashMap<FaceId, Color>,
    /// Neighbor fill for decorative edges and targets missing from the palette.
    pub neighbor_fill: Color,
    pub neighbor_stroke: Stroke,
    pub zone_idle: Stroke,
    pub zone_active_fill: Color,
    pub zone_active_stroke: Stroke,
}

impl FaceStyle {
    /// Fill for the neighbor folded off an edge leading to `target`.
    #[must_use]
    pub fn neighbor_color(&self, target: Option<&FaceId>) -> Color {
        target
            .and_then(|t| self.neighbor_palette.get(t))
            .copied()
            .unwrap_or(self.neighbor_fill)
    }

    /// Adds a palette entry.
    #[must_use]
    pub fn with_neighbor_color(mut self, target: FaceId, color: Color) -> Self {
        self.neighbor_palette.insert(target, color);
        self
    }
}

impl Default for FaceStyle {
    fn default() -> Self {
        let zone = Color::rgb(0x0000_ffcc);
        Self {
            face_fill: Color::rgb(0x002a_3b4c),
            face_stroke: Stroke {
                width: 3.0,
                color: Color::rgb(0x0088_c0d0),
            },
            neighbor_palette: HashMap::new(),
            neighbor_fill: Color::rgb(0x0016_1f2b).with_alpha(0.8),
            neighbor_stroke: Stroke {
                width: 1.5,
                color: Color::rgb(0x004c_566a).with_alpha(0.9),
            },
            zone_idle: Stroke {
                width: 1.0,
                color: zone.with_alpha(0.25),
            },
            zone_active_fill: zone.with_alpha(0.35),
            zone_active_stroke: Stroke {
                width: 2.0,
                color: zone,
            },
        }
    }
}

/// Depth bands for the rendering host. Actors belong above
/// [`Layer::ZoneHighlight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Neighbors,
    Face,
    ZoneHighlight,
}

impl Layer {
    /// Suggested scene depth; hosts draw actors at 10 or above.
    #[must_use]
    pub fn depth(self) -> i32 {
        match self {
            Self::Neighbors => -10,
            Self::Face => 0,
            Self::ZoneHighlight => 5,
        }
    }
}

/// A polygon for the rendering host to draw this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub layer: Layer,
    pub points: Vec<Point2>,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_lookup_falls_back() {
        let red = Color::rgb(0x00ff_0000);
        let style = FaceStyle::default().with_neighbor_color("face-2".into(), red);
        assert_eq!(style.neighbor_color(Some(&"face-2".into())), red);
        assert_eq!(style.neighbor_color(Some(&"face-9".into())), style.neighbor_fill);
        assert_eq!(style.neighbor_color(None), style.neighbor_fill);
    }

    #[test]
    fn layers_order_behind_actors() {
        assert!(Layer::Neighbors.depth() < Layer::Face.depth());
        assert!(Layer::Face.depth() < Layer::ZoneHighlight.depth());
        assert!(Layer::ZoneHighlight.depth() < 10);
    }
}
