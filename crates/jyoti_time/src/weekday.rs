//! Day of the week.
//!
//! Indexing is pinned to Sunday = 0 … Saturday = 6 everywhere in the
//! workspace.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;

/// The seven days of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All weekdays in index order (0 = Sunday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// 0-based index, Sunday = 0 .. Saturday = 6.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Weekday for an index, taken mod 7.
    pub const fn from_index(index: u32) -> Self {
        ALL_WEEKDAYS[(index % 7) as usize]
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Days to step back to reach the Monday of the same Monday-first week.
    pub const fn days_since_monday(self) -> u8 {
        (self.index() + 6) % 7
    }

    /// Weekday of the civil day containing a Julian Date.
    ///
    /// The civil day runs from JD `n - 0.5` to `n + 0.5`, so the day number
    /// is `floor(jd + 0.5)` and Sunday falls on `(n + 1) mod 7 == 0`.
    pub fn from_jd(jd: f64) -> Self {
        let n = (jd + 1.5).floor() as i64;
        Self::from_index(n.rem_euclid(7) as u32)
    }

    /// All weekdays in index order.
    pub const fn all() -> &'static [Weekday; 7] {
        &ALL_WEEKDAYS
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = TimeError;

    /// Accepts full English names or 3-letter abbreviations, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ALL_WEEKDAYS
            .iter()
            .copied()
            .find(|w| {
                let name = w.name().to_ascii_lowercase();
                lower == name || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| TimeError::Parse(format!("unknown weekday '{s}'")))
    }
}
