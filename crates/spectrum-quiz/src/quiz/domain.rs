use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::QuizError;

/// Upper bound of the canonical scale every question set is normalized onto.
pub const CANONICAL_MAX: f64 = 24.0;

/// Distance from zero past which an axis leaves the balanced band (25% of the canonical max).
pub const CATEGORY_THRESHOLD: f64 = CANONICAL_MAX * 0.25;

/// Independent dimension a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn tag(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Axis::X => "Gender Expression",
            Axis::Y => "Power Dynamics",
            Axis::Z => "Connection Style",
        }
    }

    /// Negative and positive pole labels, in that order.
    pub fn poles(self) -> (&'static str, &'static str) {
        match self {
            Axis::X => ("Masculine", "Feminine"),
            Axis::Y => ("Dominant", "Submissive"),
            Axis::Z => ("Romantic", "Physical"),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Axis::X => {
                "Comfort with traditionally masculine or feminine traits and behaviors."
            }
            Axis::Y => "Preferences regarding control and power dynamics in intimate relationships.",
            Axis::Z => "Whether emotional connection or physical chemistry takes priority.",
        }
    }

    /// Lenient parse used by tabular question sources (`x`, `X`, ` y `).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One value per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisTriple<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> AxisTriple<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(Axis, T) -> U) -> AxisTriple<U> {
        AxisTriple {
            x: f(Axis::X, self.x),
            y: f(Axis::Y, self.y),
            z: f(Axis::Z, self.z),
        }
    }
}

/// Signed sums of per-question contributions, on the version's own range.
pub type RawScores = AxisTriple<i32>;

/// Position on the canonical +-24 scale.
pub type Coordinate = AxisTriple<f64>;

/// Question set granularity selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizVersion {
    #[serde(alias = "short")]
    Demo,
    #[serde(alias = "medium")]
    Middle,
    #[serde(alias = "long")]
    Comprehensive,
}

impl QuizVersion {
    pub const ALL: [QuizVersion; 3] = [
        QuizVersion::Demo,
        QuizVersion::Middle,
        QuizVersion::Comprehensive,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            QuizVersion::Demo => "demo",
            QuizVersion::Middle => "middle",
            QuizVersion::Comprehensive => "comprehensive",
        }
    }

    /// Known number of items per axis; drives the normalization divisor.
    pub fn items_per_axis(self) -> u32 {
        match self {
            QuizVersion::Demo => 3,
            QuizVersion::Middle => 12,
            QuizVersion::Comprehensive => 20,
        }
    }

    pub fn file_name(self) -> String {
        format!("questions-{}.json", self.tag())
    }
}

impl fmt::Display for QuizVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for QuizVersion {
    type Err = QuizError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "demo" | "short" => Ok(QuizVersion::Demo),
            "middle" | "medium" => Ok(QuizVersion::Middle),
            "comprehensive" | "long" => Ok(QuizVersion::Comprehensive),
            _ => Err(QuizError::UnknownQuestionSetVersion(value.to_string())),
        }
    }
}

/// Identifier of a question within its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Answer on the five point agreement scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct LikertValue(u8);

impl LikertValue {
    pub const NEUTRAL: LikertValue = LikertValue(3);

    pub fn new(value: i64) -> Result<Self, QuizError> {
        match value {
            1..=5 => Ok(Self(value as u8)),
            other => Err(QuizError::InvalidResponseValue(other)),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Signed contribution: 1 -> -2, 3 -> 0, 5 -> 2.
    pub fn score(self) -> i32 {
        i32::from(self.0) - 3
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Strongly Disagree",
            2 => "Disagree",
            3 => "Neutral",
            4 => "Agree",
            _ => "Strongly Agree",
        }
    }

    pub fn scale() -> impl Iterator<Item = LikertValue> {
        (1..=5).map(LikertValue)
    }
}

impl TryFrom<i64> for LikertValue {
    type Error = QuizError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LikertValue> for u8 {
    fn from(value: LikertValue) -> Self {
        value.0
    }
}
