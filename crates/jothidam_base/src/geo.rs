//! Geographic position for horizon-dependent events.

use serde::Serialize;

use crate::error::JothidamError;

/// A point on Earth's surface. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPosition {
    /// Geodetic latitude in degrees, north positive. Range [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range [-180, 180].
    pub longitude_deg: f64,
}

/// Default reference point when the caller omits coordinates: Chennai.
pub const DEFAULT_LOCATION: GeoPosition = GeoPosition {
    latitude_deg: 13.0827,
    longitude_deg: 80.2707,
};

impl GeoPosition {
    /// Construct with range validation.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, JothidamError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(JothidamError::InvalidCoordinate(format!(
                "latitude {latitude_deg} out of [-90, 90]"
            )));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(JothidamError::InvalidCoordinate(format!(
                "longitude {longitude_deg} out of [-180, 180]"
            )));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}
