//! The ephemeris provider boundary.
//!
//! The core never performs raw astronomical arithmetic itself: tropical
//! positions, the Lahiri ayanamsha, and horizon rise/set searches all come
//! from an implementation of [`Ephemeris`]. Implementations must be safe
//! for shared concurrent reads, and process-wide provider configuration
//! (data paths, precession model) must not change after startup.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::geo::GeoPosition;

/// Bodies the provider computes directly. Ketu is derived downstream
/// (node + 180 deg) and is deliberately absent here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// Mean lunar ascending node (Rahu).
    MeanNode,
}

/// Tropical ecliptic state of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticState {
    /// Tropical ecliptic longitude in degrees.
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Longitudinal speed in degrees per day (negative = retrograde).
    pub speed_deg_per_day: f64,
}

/// Horizon events the provider can search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseEvent {
    Sunrise,
    Sunset,
}

/// Errors surfaced by an ephemeris provider.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The body is outside the provider's data coverage at this instant.
    OutOfRange(&'static str),
    /// The provider's iterative search failed to converge.
    NoConvergence(&'static str),
    /// Provider-internal failure.
    Internal(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(msg) => write!(f, "ephemeris out of range: {msg}"),
            Self::NoConvergence(msg) => write!(f, "ephemeris no convergence: {msg}"),
            Self::Internal(msg) => write!(f, "ephemeris internal error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

/// External ephemeris provider contract.
///
/// `jd` arguments are Julian Days in UT.
pub trait Ephemeris {
    /// Tropical ecliptic longitude/latitude/speed of a body.
    fn tropical_position(&self, body: Body, jd: f64) -> Result<EclipticState, EphemerisError>;

    /// Lahiri ayanamsha in degrees at the given instant.
    fn ayanamsha_deg(&self, jd: f64) -> f64;

    /// Search for a horizon event near `seed_jd` at `geo`.
    ///
    /// `Ok(None)` means the event does not occur (polar day/night); hard
    /// provider failures are errors. Callers degrade both cases to the
    /// documented approximate day window.
    fn rise_transit(
        &self,
        seed_jd: f64,
        event: RiseEvent,
        geo: &GeoPosition,
    ) -> Result<Option<f64>, EphemerisError>;
}
