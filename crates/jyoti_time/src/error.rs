//! Error types for calendar and time conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation or time parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar or clock field is out of range.
    InvalidDate(String),
    /// UTC offset outside [-14, +14] hours or not finite.
    InvalidOffset(f64),
    /// Text could not be parsed as a date, time or weekday.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidOffset(h) => write!(f, "invalid UTC offset: {h} hours"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
