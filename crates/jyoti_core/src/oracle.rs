//! The ephemeris oracle contract.
//!
//! Everything astronomical (tropical positions, ayanamsha, house cusps)
//! comes from an implementation of [`Ephemeris`]. The engine and the Vedic
//! layer only derive from its outputs.

use jyoti_time::{CivilDate, calendar_to_jd};

use crate::body::Body;
use crate::config::{AyanamshaSystem, HouseSystem};
use crate::error::EngineError;
use crate::location::GeoLocation;

/// Raw oracle output for one body at one instant.
///
/// Longitudes are tropical, ecliptic of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    pub body: Body,
    /// Tropical ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Geocentric distance in AU.
    pub distance_au: f64,
    /// Rate of change of longitude in degrees per day.
    pub speed_deg_per_day: f64,
}

impl BodyPosition {
    /// Apparent backward motion.
    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }
}

/// External ephemeris engine.
///
/// Julian Dates passed in are UT. Implementations must be deterministic.
pub trait Ephemeris {
    /// Julian Date for a Gregorian date and fractional hour of day.
    ///
    /// The default validates the fields and applies the Meeus algorithm.
    fn julian_day(&self, year: i32, month: u32, day: u32, hour: f64) -> Result<f64, EngineError> {
        CivilDate::new(year, month, day)?;
        if !hour.is_finite() || !(0.0..24.0).contains(&hour) {
            return Err(EngineError::OutOfRange {
                what: "hour of day",
                value: hour,
            });
        }
        Ok(calendar_to_jd(year, month, day as f64 + hour / 24.0))
    }

    /// Tropical position of a body.
    fn body_position(&self, jd: f64, body: Body) -> Result<BodyPosition, EngineError>;

    /// Ayanamsha in degrees for the given system.
    fn ayanamsa(&self, jd: f64, system: AyanamshaSystem) -> Result<f64, EngineError>;

    /// Tropical longitudes of the twelve house cusps; index 0 is the ascendant.
    fn house_cusps(
        &self,
        jd: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<[f64; 12], EngineError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn julian_day(&self, year: i32, month: u32, day: u32, hour: f64) -> Result<f64, EngineError> {
        (**self).julian_day(year, month, day, hour)
    }

    fn body_position(&self, jd: f64, body: Body) -> Result<BodyPosition, EngineError> {
        (**self).body_position(jd, body)
    }

    fn ayanamsa(&self, jd: f64, system: AyanamshaSystem) -> Result<f64, EngineError> {
        (**self).ayanamsa(jd, system)
    }

    fn house_cusps(
        &self,
        jd: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<[f64; 12], EngineError> {
        (**self).house_cusps(jd, location, system)
    }
}
