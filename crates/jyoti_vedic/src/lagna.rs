//! Ascendant (lagna) resolution.
//!
//! The ascendant longitude comes from the first cusp of the oracle's Equal
//! houses, defined at every latitude; this module only classifies it.

use jyoti_core::{Engine, Ephemeris, GeoLocation};
use jyoti_time::Instant;

use crate::error::VedicError;
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::rashi::{RashiInfo, rashi_from_longitude};

/// Classified sidereal ascendant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagnaInfo {
    /// Sidereal longitude of the ascendant, [0, 360).
    pub longitude_deg: f64,
    pub rashi: RashiInfo,
    pub nakshatra: NakshatraInfo,
}

impl LagnaInfo {
    pub fn from_longitude(longitude_deg: f64) -> Self {
        Self {
            longitude_deg,
            rashi: rashi_from_longitude(longitude_deg),
            nakshatra: nakshatra_from_longitude(longitude_deg),
        }
    }

    /// 0-based sign index of the ascendant.
    pub fn rashi_index(&self) -> u8 {
        self.rashi.rashi_index
    }
}

/// Sidereal ascendant at a UT Julian Date.
pub fn lagna<E: Ephemeris>(
    engine: &Engine<E>,
    jd: f64,
    location: &GeoLocation,
) -> Result<LagnaInfo, VedicError> {
    let asc = engine.ascendant_deg(jd, location)?;
    Ok(LagnaInfo::from_longitude(asc))
}

/// Sidereal ascendant for a zoned local instant.
pub fn lagna_for_instant<E: Ephemeris>(
    engine: &Engine<E>,
    instant: &Instant,
    location: &GeoLocation,
) -> Result<LagnaInfo, VedicError> {
    let jd = engine.julian_day(instant)?;
    lagna(engine, jd, location)
}
