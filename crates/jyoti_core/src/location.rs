//! Observer location on the Earth's surface.

use crate::error::EngineError;

/// Geographic location, degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl GeoLocation {
    /// Validated location: latitude in [-90, 90], longitude in [-180, 180].
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, EngineError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(EngineError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(EngineError::InvalidLocation(
                "longitude must be in [-180, 180]",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}
