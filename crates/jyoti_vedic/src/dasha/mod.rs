//! Vimshottari dasha (planetary period) calculations.
//!
//! Two views of the same 120-year cycle:
//! - [`timeline`]: whole-year segments starting at the birth calendar year,
//!   the lord taken from the Moon's nakshatra index alone.
//! - [`precise`]: Julian-day periods with the first mahadasha shortened by
//!   the birth balance, plus proportional antardasha sub-periods.

pub mod data;
pub mod precise;
pub mod timeline;
pub mod types;

pub use data::{
    DAYS_PER_YEAR, VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS,
    vimshottari_lord, vimshottari_start_index, vimshottari_years,
};
pub use precise::{
    active_period, mahadasha_lord_at, nakshatra_birth_balance, vimshottari_children, vimshottari_mahadashas,
    vimshottari_snapshot,
};
pub use timeline::{DEFAULT_DASHA_SEGMENTS, FULL_CYCLE_SEGMENTS, vimshottari_timeline};
pub use types::{DashaLevel, DashaPeriod, DashaSegment, DashaSnapshot};
