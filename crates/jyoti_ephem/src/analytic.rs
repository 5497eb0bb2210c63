//! Built-in [`Ephemeris`] implementation.
//!
//! Self-contained, no data files. Planet and Sun longitudes come from
//! Keplerian mean elements, the Moon from a truncated lunar theory and the
//! node from the Delaunay Ω argument. UT is used directly as TT.

use jyoti_core::{
    AyanamshaSystem, Body, BodyPosition, EngineError, Ephemeris, GeoLocation, HouseSystem,
    normalize_360, wrap_180,
};
use jyoti_time::{calendar_to_jd, jd_to_centuries};
use tracing::{debug, trace};

use crate::ayanamsha::ayanamsha_deg;
use crate::houses::house_cusps_tropical;
use crate::kepler::{EARTH_MOON, JUPITER, MARS, MERCURY, OrbitalElements, SATURN, VENUS};
use crate::moon::{KM_PER_AU, lunar_position};
use crate::nodes::{mean_node_deg, true_node_deg};
use crate::precession::general_precession_longitude_deg;

/// Half-width of the central difference used for longitude speed.
const SPEED_HALF_STEP_DAYS: f64 = 0.5;

/// Mean Earth-Moon distance, used as the nominal node distance.
const MEAN_LUNAR_DISTANCE_KM: f64 = 384_400.0;

/// Low-precision analytic ephemeris valid for 1800–2050.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// First and last supported Julian Dates (validity of the element table).
    pub fn supported_range() -> (f64, f64) {
        (calendar_to_jd(1800, 1, 1.0), calendar_to_jd(2051, 1, 1.0))
    }

    fn check_range(jd: f64) -> Result<(), EngineError> {
        let (first, last) = Self::supported_range();
        if !jd.is_finite() || jd < first || jd > last {
            return Err(EngineError::OutOfRange {
                what: "julian day",
                value: jd,
            });
        }
        Ok(())
    }

    /// Tropical (longitude°, latitude°, distance AU) without speed.
    fn coordinates(&self, jd: f64, body: Body) -> (f64, f64, f64) {
        let t = jd_to_centuries(jd);
        match body {
            Body::Sun => geocentric(None, t),
            Body::Mercury => geocentric(Some(&MERCURY), t),
            Body::Venus => geocentric(Some(&VENUS), t),
            Body::Mars => geocentric(Some(&MARS), t),
            Body::Jupiter => geocentric(Some(&JUPITER), t),
            Body::Saturn => geocentric(Some(&SATURN), t),
            Body::Moon => {
                let p = lunar_position(t);
                (p.longitude_deg, p.latitude_deg, p.distance_km / KM_PER_AU)
            }
            Body::MeanNode => (mean_node_deg(t), 0.0, MEAN_LUNAR_DISTANCE_KM / KM_PER_AU),
            Body::TrueNode => (true_node_deg(t), 0.0, MEAN_LUNAR_DISTANCE_KM / KM_PER_AU),
        }
    }
}

/// Geocentric ecliptic coordinates of date for a planet, or the Sun when
/// `planet` is `None`.
fn geocentric(planet: Option<&OrbitalElements>, t: f64) -> (f64, f64, f64) {
    let earth = EARTH_MOON.heliocentric_position(t);
    let helio = planet.map_or([0.0; 3], |el| el.heliocentric_position(t));
    let x = helio[0] - earth[0];
    let y = helio[1] - earth[1];
    let z = helio[2] - earth[2];
    let rho = x.hypot(y);
    let lon_j2000 = y.atan2(x).to_degrees();
    (
        normalize_360(lon_j2000 + general_precession_longitude_deg(t)),
        z.atan2(rho).to_degrees(),
        (rho * rho + z * z).sqrt(),
    )
}

impl Ephemeris for AnalyticEphemeris {
    fn body_position(&self, jd: f64, body: Body) -> Result<BodyPosition, EngineError> {
        Self::check_range(jd)?;
        let (longitude_deg, latitude_deg, distance_au) = self.coordinates(jd, body);
        let before = self.coordinates(jd - SPEED_HALF_STEP_DAYS, body).0;
        let after = self.coordinates(jd + SPEED_HALF_STEP_DAYS, body).0;
        let speed_deg_per_day = wrap_180(after - before) / (2.0 * SPEED_HALF_STEP_DAYS);
        trace!(%body, jd, longitude_deg, speed_deg_per_day, "analytic position");
        Ok(BodyPosition {
            body,
            longitude_deg,
            latitude_deg,
            distance_au,
            speed_deg_per_day,
        })
    }

    fn ayanamsa(&self, jd: f64, system: AyanamshaSystem) -> Result<f64, EngineError> {
        Self::check_range(jd)?;
        Ok(ayanamsha_deg(system, jd_to_centuries(jd)))
    }

    fn house_cusps(
        &self,
        jd: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<[f64; 12], EngineError> {
        Self::check_range(jd)?;
        let cusps = house_cusps_tropical(jd, location, system)?;
        debug!(jd, %system, ascendant = cusps[0], "tropical house cusps");
        Ok(cusps)
    }
}
