//! Error type for the scoring layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jothidam_base::JothidamError;
use jothidam_search::SearchError;
use jothidam_time::TimeError;

/// Errors from porutham matching and forecast scoring.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OpsError {
    /// Error from chart or static-data resolution.
    Base(JothidamError),
    /// Error from the search layer (dasha, panchangam).
    Search(SearchError),
    /// Error from time conversion or parsing.
    Time(TimeError),
}

impl Display for OpsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(e) => write!(f, "base error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for OpsError {}

impl From<JothidamError> for OpsError {
    fn from(e: JothidamError) -> Self {
        Self::Base(e)
    }
}

impl From<SearchError> for OpsError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<TimeError> for OpsError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
