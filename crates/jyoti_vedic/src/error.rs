//! Error types for Vedic derivations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyoti_core::EngineError;
use jyoti_time::TimeError;

/// Errors from Vedic derivations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the sidereal engine or its oracle.
    Engine(EngineError),
    /// Error from calendar or clock handling.
    Time(TimeError),
    /// Caller-supplied parameter outside its domain.
    InvalidInput(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "engine error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for VedicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::Time(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<EngineError> for VedicError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
