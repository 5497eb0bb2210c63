//! Calendar and clock arithmetic for the jyoti workspace.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversion
//! - Validated civil dates, clock times and zoned instants
//! - Weekday determination (Sunday = 0)
//! - Earth Rotation Angle, GMST and local sidereal time

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod weekday;

pub use civil::{CivilDate, Instant, MAX_UTC_OFFSET_HOURS, TimeOfDay};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd,
    days_in_month, is_leap_year, jd_from_unix_seconds, jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{
    earth_rotation_angle_rad, gmst_rad, local_sidereal_time_deg, local_sidereal_time_rad,
};
pub use weekday::{ALL_WEEKDAYS, Weekday};
