//! Vedic planet (graha) enum, rashi lordship and sidereal placement.
//!
//! The 9 grahas are the seven visible planets plus the lunar nodes Rahu
//! and Ketu. Ketu is not an oracle body: it is always exactly opposite Rahu.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use jyoti_core::{Body, Engine, Ephemeris, NodeMode, normalize_360};

use crate::error::VedicError;
use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Oracle body for this graha. Ketu has none; it is derived from Rahu.
    pub const fn body(self, node_mode: NodeMode) -> Option<Body> {
        match self {
            Self::Surya => Some(Body::Sun),
            Self::Chandra => Some(Body::Moon),
            Self::Mangal => Some(Body::Mars),
            Self::Buddh => Some(Body::Mercury),
            Self::Guru => Some(Body::Jupiter),
            Self::Shukra => Some(Body::Venus),
            Self::Shani => Some(Body::Saturn),
            Self::Rahu => Some(node_mode.body()),
            Self::Ketu => None,
        }
    }

    /// Whether this graha is one of the lunar nodes.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// All 9 grahas in traditional order.
    pub const fn all() -> &'static [Graha; 9] {
        &ALL_GRAHAS
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

impl FromStr for Graha {
    type Err = VedicError;

    /// Accepts the Sanskrit or English name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_GRAHAS
            .iter()
            .copied()
            .find(|g| g.name().eq_ignore_ascii_case(s) || g.english_name().eq_ignore_ascii_case(s))
            .ok_or(VedicError::InvalidInput("unknown graha name"))
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic assignment: Mars rules Mesha and Vrischika, Venus rules
/// Vrishabha and Tula, and so on. Rahu and Ketu rule no rashi.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}

/// Sidereal longitude and motion of one graha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaPosition {
    pub graha: Graha,
    /// Sidereal longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
}

/// Resolve a graha's sidereal position through the engine.
///
/// Rahu follows the engine's node mode; Ketu is Rahu + 180 with the same
/// motion.
pub fn graha_position<E: Ephemeris>(
    engine: &Engine<E>,
    jd: f64,
    graha: Graha,
) -> Result<GrahaPosition, VedicError> {
    let body = graha.body(engine.config().node_mode);
    let pos = match body {
        Some(body) => engine.sidereal_position(jd, body)?,
        None => engine.rahu_position(jd)?,
    };
    let longitude_deg = if graha == Graha::Ketu {
        normalize_360(pos.longitude_deg + 180.0)
    } else {
        pos.longitude_deg
    };
    Ok(GrahaPosition {
        graha,
        longitude_deg,
        speed_deg_per_day: pos.speed_deg_per_day,
        retrograde: pos.retrograde,
    })
}
