//! Simplified compatibility (Gun Milan) score.
//!
//! The score is a distance measure between two Moon nakshatras on the
//! 36-point scale, not the traditional eight-factor ashtakoota tally.

use std::fmt::{Display, Formatter};

use crate::birth::BirthContext;
use crate::util::round_to;

/// Top of the scale.
pub const MAX_MILAN_SCORE: f64 = 36.0;

/// Points lost per nakshatra of separation.
pub const DISTANCE_PENALTY: f64 = 1.3;

/// Qualitative reading of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MilanBand {
    Excellent,
    Good,
    Caution,
    Poor,
}

impl MilanBand {
    /// Band for a score: ≥30 excellent, ≥24 good, ≥18 caution, else poor.
    pub fn from_score(score: f64) -> Self {
        if score >= 30.0 {
            Self::Excellent
        } else if score >= 24.0 {
            Self::Good
        } else if score >= 18.0 {
            Self::Caution
        } else {
            Self::Poor
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Caution => "caution",
            Self::Poor => "poor",
        }
    }
}

impl Display for MilanBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MilanScore {
    /// Points out of 36, two decimal places.
    pub score: f64,
    pub band: MilanBand,
}

/// Score two nakshatra indices.
///
/// `clamp(36 - |n1 - n2| * 1.3, 0, 36)` rounded to 2 decimals. Indices are
/// not range-checked.
pub fn milan_score(nakshatra_a: u8, nakshatra_b: u8) -> MilanScore {
    let distance = (nakshatra_a as f64 - nakshatra_b as f64).abs();
    let raw = (MAX_MILAN_SCORE - distance * DISTANCE_PENALTY).clamp(0.0, MAX_MILAN_SCORE);
    let score = round_to(raw, 2);
    MilanScore {
        score,
        band: MilanBand::from_score(score),
    }
}

/// Score two people from their birth contexts' Moon nakshatras.
pub fn milan_from_births(a: &BirthContext, b: &BirthContext) -> MilanScore {
    milan_score(
        a.moon_nakshatra.nakshatra_index,
        b.moon_nakshatra.nakshatra_index,
    )
}
