//! Sidereal position and ascendant resolution on top of an oracle.

use jyoti_time::Instant;
use tracing::debug;

use crate::angle::normalize_360;
use crate::body::Body;
use crate::config::{HouseSystem, SiderealConfig};
use crate::error::EngineError;
use crate::location::GeoLocation;
use crate::oracle::Ephemeris;

/// Ayanamsha values beyond this magnitude are treated as oracle failure.
pub const MAX_AYANAMSHA_DEG: f64 = 90.0;

/// A body's position in the sidereal zodiac.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealPosition {
    pub body: Body,
    /// Tropical longitude reported by the oracle.
    pub tropical_longitude_deg: f64,
    /// Ayanamsha subtracted.
    pub ayanamsa_deg: f64,
    /// `(tropical - ayanamsa) mod 360`.
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
}

/// Derives sidereal quantities from an [`Ephemeris`] under a fixed
/// [`SiderealConfig`].
///
/// The configuration is set once in [`Engine::new`]; there is no setter.
/// No results are cached.
#[derive(Debug, Clone)]
pub struct Engine<E> {
    oracle: E,
    config: SiderealConfig,
}

impl<E: Ephemeris> Engine<E> {
    pub fn new(oracle: E, config: SiderealConfig) -> Self {
        debug!(
            ayanamsha = %config.ayanamsha,
            houses = %config.house_system,
            node = %config.node_mode,
            "engine created"
        );
        Self { oracle, config }
    }

    pub fn config(&self) -> &SiderealConfig {
        &self.config
    }

    pub fn oracle(&self) -> &E {
        &self.oracle
    }

    /// UT Julian Date of a zoned instant: oracle JD of the local reading
    /// minus `offset / 24`.
    pub fn julian_day(&self, instant: &Instant) -> Result<f64, EngineError> {
        let date = instant.date();
        let local = self.oracle.julian_day(
            date.year(),
            date.month(),
            date.day(),
            instant.time().fractional_hours(),
        )?;
        Ok(local - instant.utc_offset_hours() / 24.0)
    }

    /// Ayanamsha for the configured system, sanity-checked.
    pub fn ayanamsa_deg(&self, jd: f64) -> Result<f64, EngineError> {
        check_jd(jd)?;
        let aya = self.oracle.ayanamsa(jd, self.config.ayanamsha)?;
        if !aya.is_finite() || aya.abs() > MAX_AYANAMSHA_DEG {
            return Err(EngineError::OutOfRange {
                what: "ayanamsha",
                value: aya,
            });
        }
        Ok(aya)
    }

    /// Sidereal longitude and retrograde flag of a body.
    pub fn sidereal_position(&self, jd: f64, body: Body) -> Result<SiderealPosition, EngineError> {
        check_jd(jd)?;
        let pos = self.oracle.body_position(jd, body)?;
        if !pos.longitude_deg.is_finite() {
            return Err(EngineError::OutOfRange {
                what: "tropical longitude",
                value: pos.longitude_deg,
            });
        }
        if !pos.speed_deg_per_day.is_finite() {
            return Err(EngineError::OutOfRange {
                what: "longitude speed",
                value: pos.speed_deg_per_day,
            });
        }
        let aya = self.ayanamsa_deg(jd)?;
        let longitude_deg = normalize_360(pos.longitude_deg - aya);
        debug!(%body, jd, tropical = pos.longitude_deg, sidereal = longitude_deg, "sidereal position");
        Ok(SiderealPosition {
            body,
            tropical_longitude_deg: normalize_360(pos.longitude_deg),
            ayanamsa_deg: aya,
            longitude_deg,
            latitude_deg: pos.latitude_deg,
            speed_deg_per_day: pos.speed_deg_per_day,
            retrograde: pos.speed_deg_per_day < 0.0,
        })
    }

    /// Sidereal position of Rahu under the configured node mode.
    pub fn rahu_position(&self, jd: f64) -> Result<SiderealPosition, EngineError> {
        self.sidereal_position(jd, self.config.node_mode.body())
    }

    /// Sidereal house cusps for the configured house system.
    ///
    /// Whole-sign houses start at 0° of the ascendant's sidereal sign, so
    /// they are built here from the ascendant rather than by the oracle.
    /// Placidus is undefined at polar latitudes and reported as an error.
    pub fn house_cusps_sidereal(
        &self,
        jd: f64,
        location: &GeoLocation,
    ) -> Result<[f64; 12], EngineError> {
        if self.config.house_system == HouseSystem::WholeSign {
            let asc = self.ascendant_deg(jd, location)?;
            let start = (asc / 30.0).floor() * 30.0;
            return Ok(std::array::from_fn(|i| {
                normalize_360(start + 30.0 * i as f64)
            }));
        }
        self.oracle_cusps_sidereal(jd, location, self.config.house_system)
    }

    /// Sidereal ascendant: the first cusp of the oracle's Equal houses.
    ///
    /// Every system shares this first cusp, and Equal is defined at all
    /// latitudes, so the configured house system does not matter here.
    pub fn ascendant_deg(&self, jd: f64, location: &GeoLocation) -> Result<f64, EngineError> {
        let asc = self.oracle_cusps_sidereal(jd, location, HouseSystem::Equal)?[0];
        debug!(jd, ascendant = asc, "ascendant");
        Ok(asc)
    }

    fn oracle_cusps_sidereal(
        &self,
        jd: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<[f64; 12], EngineError> {
        check_jd(jd)?;
        let tropical = self.oracle.house_cusps(jd, location, system)?;
        if let Some(bad) = tropical.iter().find(|c| !c.is_finite()) {
            return Err(EngineError::OutOfRange {
                what: "house cusp",
                value: *bad,
            });
        }
        let aya = self.ayanamsa_deg(jd)?;
        Ok(tropical.map(|c| normalize_360(c - aya)))
    }
}

fn check_jd(jd: f64) -> Result<(), EngineError> {
    if jd.is_finite() {
        Ok(())
    } else {
        Err(EngineError::OutOfRange {
            what: "julian day",
            value: jd,
        })
    }
}
