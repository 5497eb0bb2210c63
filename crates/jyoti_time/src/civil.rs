//! Civil calendar date, clock time and zoned instants.
//!
//! `Instant` is the canonical input of every derivation: a local calendar
//! date and time of day plus a UTC offset in (possibly fractional) hours.
//! Its Julian Date is the naive local Julian Date minus `offset / 24`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month, jd_from_unix_seconds, jd_to_calendar};
use crate::weekday::Weekday;

/// Largest accepted |UTC offset| in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A validated Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Create a date, rejecting out-of-range months and days.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!("month {month} not in 1..=12")));
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(TimeError::InvalidDate(format!(
                "day {day} not in 1..={max_day} for {year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// English month name.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Julian Date at 00:00 of this date (no zone applied).
    pub fn jd_midnight(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// The civil date containing a (naive) Julian Date.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
        }
    }

    /// Local civil date at a Unix timestamp in the given UTC offset.
    pub fn from_unix_seconds(unix_s: f64, utc_offset_hours: f64) -> Self {
        Self::from_jd(jd_from_unix_seconds(unix_s) + utc_offset_hours / 24.0)
    }

    /// Date shifted by a signed number of days.
    pub fn add_days(&self, days: i64) -> Self {
        // Evaluate at noon so the floor in `from_jd` never sits on a boundary.
        Self::from_jd(self.jd_midnight() + 0.5 + days as f64)
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_jd(self.jd_midnight())
    }

    /// Monday of the Monday-first week containing this date.
    pub fn week_start_monday(&self) -> Self {
        self.add_days(-(self.weekday().days_since_monday() as i64))
    }

    /// Whole days from `self` to `other` (positive when `other` is later).
    pub fn days_until(&self, other: &CivilDate) -> i64 {
        (other.jd_midnight() - self.jd_midnight()).round() as i64
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{s}'")));
        }
        let year = parse_field::<i32>(parts[0], "year")?;
        let month = parse_field::<u32>(parts[1], "month")?;
        let day = parse_field::<u32>(parts[2], "day")?;
        Self::new(year, month, day)
    }
}

/// Clock time within a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: f64,
}

impl TimeOfDay {
    /// Create a time of day; `second` may be fractional but must be < 60.
    pub fn new(hour: u32, minute: u32, second: f64) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidDate(format!("hour {hour} not in 0..=23")));
        }
        if minute > 59 {
            return Err(TimeError::InvalidDate(format!("minute {minute} not in 0..=59")));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate(format!("second {second} not in [0, 60)")));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub const fn midnight() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0.0,
        }
    }

    pub const fn noon() -> Self {
        Self {
            hour: 12,
            minute: 0,
            second: 0.0,
        }
    }

    /// Whole-hour constructor (hour taken mod 24).
    pub const fn from_hour(hour: u32) -> Self {
        Self {
            hour: hour % 24,
            minute: 0,
            second: 0.0,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    /// `hour + minute/60 + second/3600`.
    pub fn fractional_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Add whole hours, wrapping past midnight.
    pub fn wrapping_add_hours(&self, hours: u32) -> Self {
        Self {
            hour: (self.hour + hours % 24) % 24,
            minute: self.minute,
            second: self.second,
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.second.abs() < 1e-9 {
            write!(f, "{:02}:{:02}", self.hour, self.minute)
        } else {
            write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second as u32)
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    /// Parse `HH:MM` or `HH:MM:SS[.fff]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [h, m] => Self::new(parse_field(h, "hour")?, parse_field(m, "minute")?, 0.0),
            [h, m, sec] => Self::new(
                parse_field(h, "hour")?,
                parse_field(m, "minute")?,
                parse_field(sec, "second")?,
            ),
            _ => Err(TimeError::Parse(format!("expected HH:MM[:SS], got '{s}'"))),
        }
    }
}

/// A local date and time with its UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    date: CivilDate,
    time: TimeOfDay,
    utc_offset_hours: f64,
}

impl Instant {
    /// Combine a date, time and UTC offset (hours east of Greenwich).
    pub fn new(date: CivilDate, time: TimeOfDay, utc_offset_hours: f64) -> Result<Self, TimeError> {
        if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS {
            return Err(TimeError::InvalidOffset(utc_offset_hours));
        }
        Ok(Self {
            date,
            time,
            utc_offset_hours,
        })
    }

    /// Validate and combine raw calendar fields.
    #[allow(clippy::too_many_arguments)]
    pub fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        Self::new(
            CivilDate::new(year, month, day)?,
            TimeOfDay::new(hour, minute, second)?,
            utc_offset_hours,
        )
    }

    pub fn date(&self) -> CivilDate {
        self.date
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// Naive Julian Date of the local wall-clock reading.
    pub fn local_jd(&self) -> f64 {
        calendar_to_jd(
            self.date.year,
            self.date.month,
            self.date.day as f64 + self.time.fractional_hours() / 24.0,
        )
    }

    /// Julian Date (UT) of this instant.
    pub fn to_jd_utc(&self) -> f64 {
        self.local_jd() - self.utc_offset_hours / 24.0
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let total_min = (self.utc_offset_hours.abs() * 60.0).round() as u32;
        let sign = if self.utc_offset_hours < 0.0 { '-' } else { '+' };
        write!(
            f,
            "{}T{:02}:{:02}:{:02}{}{:02}:{:02}",
            self.date,
            self.time.hour,
            self.time.minute,
            self.time.second as u32,
            sign,
            total_min / 60,
            total_min % 60
        )
    }
}

fn parse_field<T: FromStr>(text: &str, what: &str) -> Result<T, TimeError> {
    text.trim()
        .parse::<T>()
        .map_err(|_| TimeError::Parse(format!("invalid {what} '{text}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn rejects_bad_dates() {
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2024, 13, 1).is_err());
        assert!(CivilDate::new(2024, 4, 31).is_err());
        assert!(CivilDate::new(2024, 4, 0).is_err());
    }

    #[test]
    fn rejects_bad_times() {
        assert!(TimeOfDay::new(24, 0, 0.0).is_err());
        assert!(TimeOfDay::new(23, 60, 0.0).is_err());
        assert!(TimeOfDay::new(23, 59, 60.0).is_err());
        assert!(TimeOfDay::new(23, 59, 59.9).is_ok());
    }

    #[test]
    fn rejects_bad_offset() {
        let d = CivilDate::new(2024, 1, 1).unwrap();
        assert!(matches!(
            Instant::new(d, TimeOfDay::noon(), 15.0),
            Err(TimeError::InvalidOffset(_))
        ));
        assert!(Instant::new(d, TimeOfDay::noon(), f64::NAN).is_err());
        assert!(Instant::new(d, TimeOfDay::noon(), -12.0).is_ok());
    }

    #[test]
    fn utc_instant_at_j2000() {
        let i = Instant::from_fields(2000, 1, 1, 12, 0, 0.0, 0.0).unwrap();
        assert!((i.to_jd_utc() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn offset_is_subtracted() {
        // 17:30 IST (+5:30) is 12:00 UTC
        let i = Instant::from_fields(2000, 1, 1, 17, 30, 0.0, 5.5).unwrap();
        assert!((i.to_jd_utc() - J2000_JD).abs() < 1e-9);
        assert!((i.local_jd() - i.to_jd_utc() - 5.5 / 24.0).abs() < 1e-12);
    }

    #[test]
    fn add_days_crosses_month_and_year() {
        let d = CivilDate::new(2023, 12, 30).unwrap();
        assert_eq!(d.add_days(3), CivilDate::new(2024, 1, 2).unwrap());
        assert_eq!(d.add_days(-30), CivilDate::new(2023, 11, 30).unwrap());
        let leap = CivilDate::new(2024, 2, 28).unwrap();
        assert_eq!(leap.add_days(1), CivilDate::new(2024, 2, 29).unwrap());
    }

    #[test]
    fn week_start() {
        // 2024-03-20 is a Wednesday; the week starts Monday 2024-03-18
        let d = CivilDate::new(2024, 3, 20).unwrap();
        assert_eq!(d.week_start_monday(), CivilDate::new(2024, 3, 18).unwrap());
        // Sunday belongs to the week that started six days earlier
        let sun = CivilDate::new(2024, 3, 24).unwrap();
        assert_eq!(sun.week_start_monday(), CivilDate::new(2024, 3, 18).unwrap());
    }

    #[test]
    fn days_until_counts() {
        let a = CivilDate::new(2024, 1, 1).unwrap();
        let b = CivilDate::new(2024, 3, 1).unwrap();
        assert_eq!(a.days_until(&b), 60);
        assert_eq!(b.days_until(&a), -60);
    }

    #[test]
    fn parse_and_display() {
        let d: CivilDate = "1990-01-01".parse().unwrap();
        assert_eq!(d.to_string(), "1990-01-01");
        let t: TimeOfDay = "06:30".parse().unwrap();
        assert_eq!(t.to_string(), "06:30");
        let t2: TimeOfDay = "10:15:30".parse().unwrap();
        assert_eq!(t2.to_string(), "10:15:30");
        assert!("1990/01/01".parse::<CivilDate>().is_err());
        assert!("25:00".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn instant_display_with_offset() {
        let i = Instant::from_fields(1990, 1, 1, 10, 0, 0.0, 5.5).unwrap();
        assert_eq!(i.to_string(), "1990-01-01T10:00:00+05:30");
        let w = Instant::from_fields(1990, 1, 1, 10, 0, 0.0, -3.75).unwrap();
        assert_eq!(w.to_string(), "1990-01-01T10:00:00-03:45");
    }

    #[test]
    fn wrapping_hours() {
        let t = TimeOfDay::from_hour(22);
        assert_eq!(t.wrapping_add_hours(3).hour(), 1);
        assert_eq!(t.wrapping_add_hours(24).hour(), 22);
    }

    #[test]
    fn from_unix_applies_offset() {
        // 2000-01-01T20:00:00Z is already Jan 2 in UTC+5:30
        let d = CivilDate::from_unix_seconds(946_756_800.0, 5.5);
        assert_eq!(d, CivilDate::new(2000, 1, 2).unwrap());
        let d0 = CivilDate::from_unix_seconds(946_756_800.0, 0.0);
        assert_eq!(d0, CivilDate::new(2000, 1, 1).unwrap());
    }
}
