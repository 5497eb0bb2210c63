//! Transit positions and house placement relative to an ascendant sign.
//!
//! Houses are counted sign-by-sign from the ascendant's sign: the sign the
//! ascendant occupies is house 1, the next sign house 2, and so on.

use jyoti_core::{Engine, Ephemeris};
use jyoti_time::{CivilDate, Instant, TimeOfDay};
use tracing::debug;

use crate::error::VedicError;
use crate::graha::{Graha, graha_position};
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::rashi::{RashiInfo, rashi_from_longitude};

/// Grahas observed for transits, in reporting order.
pub const TRANSIT_GRAHAS: [Graha; 8] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
    Graha::Rahu,
];

/// Default number of days in a transit forecast.
pub const DEFAULT_FORECAST_DAYS: u32 = 7;

/// House number (1..=12) of a sign counted from the ascendant sign.
///
/// `((sign - asc + 12) mod 12) + 1`. Both indices are taken mod 12.
pub const fn house_from_signs(sign_index: u8, ascendant_index: u8) -> u8 {
    ((sign_index % 12 + 12 - ascendant_index % 12) % 12) + 1
}

/// One graha's transit placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitRecord {
    pub graha: Graha,
    /// Sidereal longitude, [0, 360).
    pub longitude_deg: f64,
    pub rashi: RashiInfo,
    pub nakshatra: NakshatraInfo,
    /// House counted from the ascendant sign, 1..=12.
    pub house: u8,
    pub retrograde: bool,
}

impl TransitRecord {
    /// Degrees within the sign, [0, 30).
    pub fn degree_in_sign(&self) -> f64 {
        self.rashi.degrees_in_rashi
    }
}

/// Transit records for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitDay {
    pub date: CivilDate,
    /// UT Julian Date the positions were evaluated at.
    pub jd: f64,
    pub records: Vec<TransitRecord>,
}

fn check_ascendant(ascendant_index: u8) -> Result<(), VedicError> {
    if ascendant_index < 12 {
        Ok(())
    } else {
        Err(VedicError::InvalidInput("ascendant sign index must be 0..=11"))
    }
}

/// Place every transit graha at `jd` relative to the ascendant sign.
pub fn transit_positions<E: Ephemeris>(
    engine: &Engine<E>,
    jd: f64,
    ascendant_index: u8,
) -> Result<Vec<TransitRecord>, VedicError> {
    check_ascendant(ascendant_index)?;
    TRANSIT_GRAHAS
        .iter()
        .map(|&graha| {
            let pos = graha_position(engine, jd, graha)?;
            let rashi = rashi_from_longitude(pos.longitude_deg);
            Ok(TransitRecord {
                graha,
                longitude_deg: pos.longitude_deg,
                rashi,
                nakshatra: nakshatra_from_longitude(pos.longitude_deg),
                house: house_from_signs(rashi.rashi_index, ascendant_index),
                retrograde: pos.retrograde,
            })
        })
        .collect()
}

/// Daily transit forecast.
///
/// Each of `days` consecutive dates starting at `start` is evaluated
/// independently at local `time` in the given UTC offset.
#[tracing::instrument(skip(engine))]
pub fn transit_forecast<E: Ephemeris>(
    engine: &Engine<E>,
    start: CivilDate,
    days: u32,
    time: TimeOfDay,
    utc_offset_hours: f64,
    ascendant_index: u8,
) -> Result<Vec<TransitDay>, VedicError> {
    check_ascendant(ascendant_index)?;
    (0..days)
        .map(|i| {
            let date = start.add_days(i as i64);
            let instant = Instant::new(date, time, utc_offset_hours)?;
            let jd = engine.julian_day(&instant)?;
            let records = transit_positions(engine, jd, ascendant_index)?;
            debug!(%date, jd, "transit day");
            Ok(TransitDay { date, jd, records })
        })
        .collect()
}
