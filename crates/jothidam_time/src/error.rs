//! Error types for time parsing and conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from local-time resolution and input parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string did not parse as YYYY-MM-DD.
    InvalidDate(String),
    /// Time string did not parse as HH:MM or HH:MM:SS.
    InvalidTime(String),
    /// Zone string is not a known IANA timezone identifier.
    UnknownZone(String),
    /// Local wall-clock time does not exist in the zone (DST gap).
    NonexistentLocalTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date (expected YYYY-MM-DD): {s:?}"),
            Self::InvalidTime(s) => write!(f, "invalid time (expected HH:MM[:SS]): {s:?}"),
            Self::UnknownZone(s) => write!(f, "unknown timezone identifier: {s:?}"),
            Self::NonexistentLocalTime(s) => {
                write!(f, "local time does not exist in this zone: {s}")
            }
        }
    }
}

impl Error for TimeError {}
