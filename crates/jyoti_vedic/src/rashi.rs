//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) classification.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at sidereal 0 degrees. Given a sidereal
//! longitude we identify the sign and express the position within it as
//! degrees-minutes-seconds.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use jyoti_core::normalize_360;

use crate::error::VedicError;

/// Width of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Rashi for a 0-based index, `None` beyond 11.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_RASHIS[index as usize])
        } else {
            None
        }
    }

    /// Sidereal longitude where this rashi begins.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * RASHI_SPAN
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.western_name())
    }
}

impl FromStr for Rashi {
    type Err = VedicError;

    /// Accepts the Sanskrit or Western name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_RASHIS
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(s) || r.western_name().eq_ignore_ascii_case(s))
            .ok_or(VedicError::InvalidInput("unknown rashi name"))
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}°{:02}'{:02}\"",
            self.degrees,
            self.minutes,
            self.seconds.floor() as u8
        )
    }
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Negative input is taken by absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// 0-based sign index of a sidereal longitude, `floor(lon / 30)`.
///
/// The longitude is normalized to [0, 360) first; the result is clamped
/// to 11 against float drift just below 360.
pub fn rashi_index(sidereal_lon_deg: f64) -> u8 {
    let lon = normalize_360(sidereal_lon_deg);
    ((lon / RASHI_SPAN).floor() as u8).min(11)
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_idx = rashi_index(lon);
    let degrees_in_rashi = lon - (rashi_idx as f64) * RASHI_SPAN;
    let rashi = ALL_RASHIS[rashi_idx as usize];

    RashiInfo {
        rashi,
        rashi_index: rashi_idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_either_name() {
        assert_eq!("karka".parse::<Rashi>().unwrap(), Rashi::Karka);
        assert_eq!(" Capricorn ".parse::<Rashi>().unwrap(), Rashi::Makara);
        assert!("ophiuchus".parse::<Rashi>().is_err());
    }

    #[test]
    fn all_rashis_count() {
        assert_eq!(ALL_RASHIS.len(), 12);
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), Some(*r));
        }
        assert_eq!(Rashi::from_index(12), None);
    }

    #[test]
    fn rashi_boundaries() {
        assert_eq!(rashi_from_longitude(0.0).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(29.999).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(30.0).rashi, Rashi::Vrishabha);
        assert_eq!(rashi_from_longitude(359.999).rashi, Rashi::Meena);
    }

    #[test]
    fn rashi_wraps_360_and_negative() {
        assert_eq!(rashi_from_longitude(360.0).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(-10.0).rashi, Rashi::Meena);
        assert_eq!(rashi_from_longitude(725.0).rashi, Rashi::Mesha);
    }

    #[test]
    fn sign_index_closed_under_360() {
        let mut x = 0.0;
        while x < 360.0 {
            assert_eq!(rashi_index(x), rashi_index(x + 360.0), "x = {x}");
            x += 0.37;
        }
    }

    #[test]
    fn degrees_in_rashi_range() {
        let info = rashi_from_longitude(95.25);
        assert_eq!(info.rashi, Rashi::Karka);
        assert!((info.degrees_in_rashi - 5.25).abs() < 1e-12);
        assert_eq!(info.dms.degrees, 5);
        assert_eq!(info.dms.minutes, 15);
    }

    #[test]
    fn dms_display() {
        let dms = deg_to_dms(12.5 + 7.5 / 3600.0);
        assert_eq!(dms.to_string(), "12°30'07\"");
        assert!((dms_to_deg(&dms) - (12.5 + 7.5 / 3600.0)).abs() < 1e-9);
    }

    #[test]
    fn display_has_both_names() {
        assert_eq!(Rashi::Karka.to_string(), "Karka (Cancer)");
        assert_eq!(Rashi::Makara.start_deg(), 270.0);
    }
}
