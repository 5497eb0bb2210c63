//! Analytic ephemeris oracle.
//!
//! [`AnalyticEphemeris`] implements [`jyoti_core::Ephemeris`] from closed-form
//! theories: Keplerian mean elements for the Sun and planets, an abridged
//! lunar theory for the Moon, the Delaunay node, IAU 2006 precession for
//! ayanamsha, and Placidus/Sripati/Equal/Whole-sign house cusps. Accuracy
//! is at the arc-minute level, enough for sign and nakshatra work.

pub mod analytic;
pub mod ayanamsha;
pub mod houses;
pub mod kepler;
pub mod moon;
pub mod nodes;
pub mod precession;

pub use analytic::AnalyticEphemeris;
pub use ayanamsha::{ayanamsha_deg, ayanamsha_mean_deg};
pub use houses::{
    PLACIDUS_MAX_LATITUDE_DEG, ascendant_deg, equal_cusps, house_cusps_tropical, midheaven_deg,
    placidus_cusps, sripati_cusps, whole_sign_cusps,
};
pub use moon::{KM_PER_AU, LunarPosition, lunar_position};
pub use nodes::{mean_node_deg, true_node_deg};
pub use precession::{
    fundamental_arguments, general_precession_longitude_deg, mean_obliquity_deg,
    nutation_longitude_arcsec,
};
