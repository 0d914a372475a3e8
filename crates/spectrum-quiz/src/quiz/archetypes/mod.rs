//! Classification of canonical coordinates into the 27 archetypes.
//!
//! Each axis is bucketed into Low / Balanced / High with a fixed threshold of 6 on the
//! canonical +-24 scale, and the ordered triple of buckets keys a static catalog.

mod catalog;

use super::domain::{Axis, AxisTriple, Coordinate, CANONICAL_MAX, CATEGORY_THRESHOLD};
use super::error::QuizError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-axis bucket of a canonical score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisCategory {
    Low,
    Balanced,
    High,
}

impl AxisCategory {
    pub const ALL: [AxisCategory; 3] = [
        AxisCategory::Low,
        AxisCategory::Balanced,
        AxisCategory::High,
    ];

    /// Strict comparisons: exactly +-6 stays balanced.
    pub fn from_score(score: f64) -> Self {
        if score < -CATEGORY_THRESHOLD {
            AxisCategory::Low
        } else if score > CATEGORY_THRESHOLD {
            AxisCategory::High
        } else {
            AxisCategory::Balanced
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            AxisCategory::Low => "low",
            AxisCategory::Balanced => "balanced",
            AxisCategory::High => "high",
        }
    }

    /// Center of the category's span on the canonical scale (-15, 0, 15).
    pub fn midpoint(self) -> f64 {
        match self {
            AxisCategory::Low => (-CANONICAL_MAX - CATEGORY_THRESHOLD) / 2.0,
            AxisCategory::Balanced => 0.0,
            AxisCategory::High => (CATEGORY_THRESHOLD + CANONICAL_MAX) / 2.0,
        }
    }

    pub fn range(self) -> CoordinateRange {
        let max = CANONICAL_MAX as i32;
        let outer = CATEGORY_THRESHOLD.ceil() as i32;
        let inner = CATEGORY_THRESHOLD.floor() as i32;
        match self {
            AxisCategory::Low => CoordinateRange::new(-max, -outer),
            AxisCategory::Balanced => CoordinateRange::new(-inner, inner),
            AxisCategory::High => CoordinateRange::new(outer, max),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            AxisCategory::Low => AxisCategory::High,
            AxisCategory::Balanced => AxisCategory::Balanced,
            AxisCategory::High => AxisCategory::Low,
        }
    }

    /// One-word label used in result subtitles.
    pub fn short_label(self, axis: Axis) -> &'static str {
        match (axis, self) {
            (Axis::Y, AxisCategory::Balanced) => "Switch",
            (_, AxisCategory::Balanced) => "Balanced",
            (axis, AxisCategory::Low) => axis.poles().0,
            (axis, AxisCategory::High) => axis.poles().1,
        }
    }
}

impl fmt::Display for AxisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Span of canonical scores implied by a category. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateRange {
    pub min: i32,
    pub max: i32,
}

impl CoordinateRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for CoordinateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Ordered (x, y, z) category triple identifying an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArchetypeKey {
    pub x: AxisCategory,
    pub y: AxisCategory,
    pub z: AxisCategory,
}

impl ArchetypeKey {
    pub fn new(x: AxisCategory, y: AxisCategory, z: AxisCategory) -> Self {
        Self { x, y, z }
    }

    pub fn for_coordinate(coordinate: &Coordinate) -> Self {
        Self {
            x: AxisCategory::from_score(coordinate.x),
            y: AxisCategory::from_score(coordinate.y),
            z: AxisCategory::from_score(coordinate.z),
        }
    }

    /// All 27 keys, X outermost and Z innermost.
    pub fn all() -> impl Iterator<Item = ArchetypeKey> {
        AxisCategory::ALL.into_iter().flat_map(|x| {
            AxisCategory::ALL.into_iter().flat_map(move |y| {
                AxisCategory::ALL
                    .into_iter()
                    .map(move |z| ArchetypeKey::new(x, y, z))
            })
        })
    }

    pub fn categories(&self) -> AxisTriple<AxisCategory> {
        AxisTriple::new(self.x, self.y, self.z)
    }

    /// Category midpoints, i.e. where the archetype sits on the canonical map.
    pub fn midpoint(&self) -> Coordinate {
        self.categories().map(|_, category| category.midpoint())
    }
}

impl fmt::Display for ArchetypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.x, self.y, self.z)
    }
}

/// Static catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archetype {
    pub key: ArchetypeKey,
    pub name: &'static str,
    pub glyph: &'static str,
    pub description: &'static str,
}

impl Archetype {
    pub fn ranges(&self) -> AxisTriple<CoordinateRange> {
        self.key.categories().map(|_, category| category.range())
    }

    pub fn canonical_position(&self) -> Coordinate {
        self.key.midpoint()
    }

    /// Owned, serializable copy handed to the presentation layer.
    pub fn record(&self) -> ArchetypeRecord {
        ArchetypeRecord {
            key: self.key,
            name: self.name.to_string(),
            glyph: self.glyph.to_string(),
            description: self.description.to_string(),
            ranges: self.ranges(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeRecord {
    pub key: ArchetypeKey,
    pub name: String,
    pub glyph: String,
    pub description: String,
    pub ranges: AxisTriple<CoordinateRange>,
}

pub fn catalog() -> &'static [Archetype] {
    &catalog::CATALOG
}

pub fn lookup(key: ArchetypeKey) -> Result<&'static Archetype, QuizError> {
    catalog::CATALOG
        .iter()
        .find(|archetype| archetype.key == key)
        .ok_or(QuizError::UnknownArchetypeKey(key))
}

pub fn classify(coordinate: &Coordinate) -> Result<&'static Archetype, QuizError> {
    lookup(ArchetypeKey::for_coordinate(coordinate))
}
