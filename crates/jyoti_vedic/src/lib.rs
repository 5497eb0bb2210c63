//! Vedic derivations built on sidereal engine outputs.
//!
//! This crate provides:
//! - Rashi (sign) and nakshatra classification of sidereal longitudes
//! - Grahas, rashi lordship and sidereal graha positions (Ketu = Rahu + 180)
//! - Vimshottari dasha: whole-year timelines and Julian-day periods
//! - Transit house placement, lagna, hora tables and muhurta filtering
//! - A simplified nakshatra-distance compatibility score
//! - [`BirthContext`] and [`NatalChart`]

pub mod birth;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod hora;
pub mod lagna;
pub mod milan;
pub mod muhurta;
pub mod nakshatra;
pub mod rashi;
pub mod transit;
pub mod util;

pub use birth::{BirthContext, GrahaPlacement, NatalChart, bhava_of_longitude, natal_chart};
pub use dasha::{
    DAYS_PER_YEAR, DEFAULT_DASHA_SEGMENTS, DashaLevel, DashaPeriod, DashaSegment, DashaSnapshot,
    FULL_CYCLE_SEGMENTS, VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS,
    active_period, mahadasha_lord_at, nakshatra_birth_balance, vimshottari_children,
    vimshottari_lord, vimshottari_mahadashas, vimshottari_snapshot, vimshottari_start_index,
    vimshottari_timeline, vimshottari_years,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, GrahaPosition, SAPTA_GRAHAS, graha_position, rashi_lord};
pub use hora::{
    DEFAULT_SUNRISE, DayRulerRule, HORA_COUNT, HORA_SEQUENCE, HoraWindow, day_ruler, hora_at,
    hora_at_time, hora_table, vaar_lord,
};
pub use lagna::{LagnaInfo, lagna, lagna_for_instant};
pub use milan::{
    DISTANCE_PENALTY, MAX_MILAN_SCORE, MilanBand, MilanScore, milan_from_births, milan_score,
};
pub use muhurta::{
    DEFAULT_MAX_RESULTS, DEFAULT_WINDOW_DAYS, MuhurtaQuery, MuhurtaTable, find_muhurta_dates,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_COUNT, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_index,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
    rashi_index,
};
pub use transit::{
    DEFAULT_FORECAST_DAYS, TRANSIT_GRAHAS, TransitDay, TransitRecord, house_from_signs,
    transit_forecast, transit_positions,
};
