mod band;
mod shortlist;

pub use band::{band_color, CompatibilityBand, Rgb, HIGH_BAND_FLOOR, MODERATE_BAND_FLOOR};
pub use shortlist::{shortlist, SHORTLIST_LIMIT};

use super::archetypes::{catalog, ArchetypeKey, AxisCategory};
use super::domain::{Coordinate, CANONICAL_MAX};
use serde::Serialize;

/// Similarity window for the X and Z axes: 4 points on the canonical scale.
pub const SIMILARITY_WINDOW: f64 = 4.0 / CANONICAL_MAX;
/// Complementarity window for the Y axis, in unit-scale distance.
pub const COMPLEMENT_WINDOW: f64 = 1.5;

pub const Y_WEIGHT: f64 = 0.40;
pub const X_WEIGHT: f64 = 0.30;
pub const Z_WEIGHT: f64 = 0.30;

/// Per-axis sub-scores behind an overall compatibility value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompatibilityBreakdown {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub overall: f64,
}

/// Score how well `candidate` suits `seeker`, in [0, 1].
///
/// X and Z reward similarity. Y rewards complementarity: the seeker's position is compared
/// against the mirror image of the candidate's. A seeker in the balanced Y band is a
/// switch and accepts any power-dynamic position, so the relation is directional.
/// The switch rule follows the strict ±6 category edge, so the Y sub-score steps from 1.0
/// down to the mirrored similarity as soon as |y| passes 6.
pub fn compatibility(seeker: &Coordinate, candidate: &Coordinate) -> f64 {
    compatibility_breakdown(seeker, candidate).overall
}

pub fn compatibility_breakdown(seeker: &Coordinate, candidate: &Coordinate) -> CompatibilityBreakdown {
    let a = seeker.map(|_, value| value / CANONICAL_MAX);
    let b = candidate.map(|_, value| value / CANONICAL_MAX);

    let x = similarity(a.x, b.x, SIMILARITY_WINDOW);
    let y = if AxisCategory::from_score(seeker.y) == AxisCategory::Balanced {
        1.0
    } else {
        similarity(a.y, -b.y, COMPLEMENT_WINDOW)
    };
    let z = similarity(a.z, b.z, SIMILARITY_WINDOW);

    let overall = (y * Y_WEIGHT + x * X_WEIGHT + z * Z_WEIGHT).clamp(0.0, 1.0);

    CompatibilityBreakdown { x, y, z, overall }
}

fn similarity(a: f64, b: f64, window: f64) -> f64 {
    (1.0 - (a - b).abs() / window).max(0.0)
}

/// Compatibility of the user with one archetype's canonical position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompatibilityZone {
    pub archetype: ArchetypeKey,
    pub name: &'static str,
    pub glyph: &'static str,
    pub position: Coordinate,
    pub score: f64,
    pub band: CompatibilityBand,
    pub color: Rgb,
}

impl CompatibilityZone {
    /// Zones worth emphasising in a visualization.
    pub fn is_highlighted(&self) -> bool {
        self.score > 0.5
    }
}

/// Score the user against every archetype position, in catalog order.
pub fn compatibility_map(user: &Coordinate) -> Vec<CompatibilityZone> {
    catalog()
        .iter()
        .map(|archetype| {
            let position = archetype.canonical_position();
            let score = compatibility(user, &position);
            CompatibilityZone {
                archetype: archetype.key,
                name: archetype.name,
                glyph: archetype.glyph,
                position,
                score,
                band: CompatibilityBand::from_score(score),
                color: band_color(score),
            }
        })
        .collect()
}
