//! Error types for panchangam, dasha, and muhurtham search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jothidam_base::JothidamError;
use jothidam_time::TimeError;

/// Errors from the search layer.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from chart/position resolution.
    Base(JothidamError),
    /// Error from time conversion or parsing.
    Time(TimeError),
    /// Dasha query outside the 120-year span.
    NoPeriod(&'static str),
    /// Malformed date range or scan parameters.
    InvalidRange(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(e) => write!(f, "base error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::NoPeriod(msg) => write!(f, "no dasha period: {msg}"),
            Self::InvalidRange(msg) => write!(f, "invalid range: {msg}"),
        }
    }
}

impl Error for SearchError {}

impl From<JothidamError> for SearchError {
    fn from(e: JothidamError) -> Self {
        Self::Base(e)
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
