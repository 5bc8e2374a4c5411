//! Error types for the base calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jothidam_time::TimeError;

use crate::ephemeris::EphemerisError;

/// Errors from chart and position resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum JothidamError {
    /// Error from the ephemeris provider.
    Ephemeris(EphemerisError),
    /// Error from time conversion or input parsing.
    Time(TimeError),
    /// Latitude/longitude outside the valid range.
    InvalidCoordinate(String),
    /// Unrecognized rashi name.
    UnknownRashi(String),
    /// Unrecognized nakshatra name.
    UnknownNakshatra(String),
    /// Unrecognized graha name.
    UnknownGraha(String),
}

impl Display for JothidamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {msg}"),
            Self::UnknownRashi(s) => write!(f, "unknown rashi: {s:?}"),
            Self::UnknownNakshatra(s) => write!(f, "unknown nakshatra: {s:?}"),
            Self::UnknownGraha(s) => write!(f, "unknown graha: {s:?}"),
        }
    }
}

impl Error for JothidamError {}

impl From<EphemerisError> for JothidamError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for JothidamError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
