use serde::{Deserialize, Serialize};
use std::fmt;

pub const HIGH_BAND_FLOOR: f64 = 0.65;
pub const MODERATE_BAND_FLOOR: f64 = 0.45;

/// Traffic-light tier of a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityBand {
    Low,
    Moderate,
    High,
}

impl CompatibilityBand {
    pub fn from_score(score: f64) -> Self {
        let score = score.clamp(0.0, 1.0);
        if score >= HIGH_BAND_FLOOR {
            CompatibilityBand::High
        } else if score >= MODERATE_BAND_FLOOR {
            CompatibilityBand::Moderate
        } else {
            CompatibilityBand::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompatibilityBand::Low => "low compatibility",
            CompatibilityBand::Moderate => "moderate compatibility",
            CompatibilityBand::High => "high compatibility",
        }
    }
}

impl fmt::Display for CompatibilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed `0xRRGGBB` value.
    pub fn hex(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.hex())
    }
}

/// Continuous color for a score: red to orange below 0.45, yellow to yellow-green up
/// to 0.65, then mint to pure green at 1.0.
pub fn band_color(score: f64) -> Rgb {
    let score = score.clamp(0.0, 1.0);

    match CompatibilityBand::from_score(score) {
        CompatibilityBand::High => {
            let t = (score - 0.65) / 0.35;
            Rgb::new(channel(51.0 - 51.0 * t), 255, channel(136.0 - 136.0 * t))
        }
        CompatibilityBand::Moderate => {
            let t = (score - 0.45) / 0.2;
            Rgb::new(channel(255.0 - 204.0 * t), 255, channel(136.0 * t))
        }
        CompatibilityBand::Low => {
            let t = score / 0.45;
            Rgb::new(255, channel(50.0 + 205.0 * t), 0)
        }
    }
}

fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
