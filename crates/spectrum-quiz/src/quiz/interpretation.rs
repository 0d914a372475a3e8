use super::domain::{Axis, CANONICAL_MAX};

/// Labelled span of canonical scores.
///
/// Spans are contiguous over [-24, 24]; a shared boundary belongs to the span nearer zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpretationBin {
    pub min: f64,
    pub max: f64,
    pub text: &'static str,
}

impl InterpretationBin {
    pub fn contains(&self, score: f64) -> bool {
        if self.max <= 0.0 {
            self.min <= score && score < self.max
        } else if self.min >= 0.0 {
            self.min < score && score <= self.max
        } else {
            self.min <= score && score <= self.max
        }
    }
}

const EDGES: [f64; 8] = [-24.0, -15.5, -7.5, -2.5, 2.5, 7.5, 15.5, 24.0];

/// Ordered bins for an axis, most negative first.
pub fn interpretation_bins(axis: Axis) -> [InterpretationBin; 7] {
    let labels = bin_labels(axis);
    std::array::from_fn(|index| InterpretationBin {
        min: EDGES[index],
        max: EDGES[index + 1],
        text: labels[index],
    })
}

fn bin_labels(axis: Axis) -> [&'static str; 7] {
    match axis {
        Axis::X => [
            "Strongly masculine-leaning",
            "Moderately masculine-leaning",
            "Slightly masculine-leaning",
            "Balanced/Neutral",
            "Slightly feminine-leaning",
            "Moderately feminine-leaning",
            "Strongly feminine-leaning",
        ],
        Axis::Y => [
            "Strongly dominant-leaning",
            "Moderately dominant-leaning",
            "Slightly dominant-leaning",
            "Balanced/Switch",
            "Slightly submissive-leaning",
            "Moderately submissive-leaning",
            "Strongly submissive-leaning",
        ],
        Axis::Z => [
            "Strongly romantic-leaning",
            "Moderately romantic-leaning",
            "Slightly romantic-leaning",
            "Balanced",
            "Slightly physical chemistry-driven",
            "Moderately physical chemistry-driven",
            "Strongly physical chemistry-driven",
        ],
    }
}

/// Descriptive text for a canonical score. Out-of-range input is clamped first.
pub fn interpret_axis(axis: Axis, score: f64) -> &'static str {
    let score = score.clamp(-CANONICAL_MAX, CANONICAL_MAX);
    interpretation_bins(axis)
        .iter()
        .find(|bin| bin.contains(score))
        .map(|bin| bin.text)
        .unwrap_or("Neutral")
}
