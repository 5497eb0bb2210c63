//! Engine error type.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyoti_time::TimeError;

use crate::body::Body;

/// Errors from the oracle contract and the sidereal engine.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    /// Calendar or clock input rejected.
    InvalidDate(TimeError),
    /// Unrecognized configuration value.
    InvalidConfig(&'static str),
    /// Latitude/longitude out of range, or unusable for the house system.
    InvalidLocation(&'static str),
    /// The oracle failed to produce a value.
    Oracle(String),
    /// The oracle (or caller) produced a value outside its valid domain.
    OutOfRange { what: &'static str, value: f64 },
    /// The oracle cannot compute this body.
    UnsupportedBody(Body),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(e) => write!(f, "invalid date: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Oracle(msg) => write!(f, "ephemeris oracle failure: {msg}"),
            Self::OutOfRange { what, value } => write!(f, "{what} out of range: {value}"),
            Self::UnsupportedBody(body) => write!(f, "unsupported body: {body}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for EngineError {
    fn from(e: TimeError) -> Self {
        Self::InvalidDate(e)
    }
}
