//! Core types for dasha calculations.

use crate::graha::Graha;

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
}

impl DashaLevel {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// One whole-year dasha segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashaSegment {
    pub graha: Graha,
    /// Calendar year the segment starts.
    pub start_year: i32,
    /// Calendar year the segment ends; equals the next segment's start.
    pub end_year: i32,
}

impl DashaSegment {
    pub fn duration_years(&self) -> i32 {
        self.end_year - self.start_year
    }
}

/// A single dasha period on the Julian-day axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub graha: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Index into parent level's array (0 for level 0).
    pub parent_idx: u32,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether `jd` falls in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// Running periods at one query instant, one per level.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaSnapshot {
    pub query_jd: f64,
    pub periods: Vec<DashaPeriod>,
}
