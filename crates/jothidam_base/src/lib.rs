//! Foundations of the jothidam core: the nine grahas, twelve rashis, and
//! twenty-seven nakshatras as immutable static data, the ephemeris provider
//! boundary, and chart resolution (sidereal positions, dignity strength,
//! lagna).
//!
//! Everything here is a pure function of its inputs. Nothing holds mutable
//! state across calls; results are value records that downstream crates
//! pass around freely.

pub mod ephemeris;
pub mod error;
pub mod geo;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod position;
pub mod rashi;
pub mod util;

pub use ephemeris::{Body, EclipticState, Ephemeris, EphemerisError, RiseEvent};
pub use error::JothidamError;
pub use geo::{DEFAULT_LOCATION, GeoPosition};
pub use graha::{ALL_GRAHAS, Graha, Relation};
pub use lagna::{lagna_rashi, lagna_sidereal_longitude};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraPosition, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use position::{Chart, PlanetPosition, chart_at, dignity_strength, house_from, position_of};
pub use rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, rashi_from_longitude};
pub use util::{format_dms, normalize_360};
