//! Time foundation for the jothidam core.
//!
//! This crate provides:
//! - Julian Day ↔ Gregorian calendar conversions
//! - Local-time resolution: (date, time, IANA zone) → Julian Day in UT
//! - The inverse back-conversion for presentation (windows that cross
//!   midnight roll the day field correctly)
//! - Strict parsing/validation of date, time, and zone strings
//!
//! Once an instant is resolved to a Julian Day, all downstream math runs
//! in Universal Time; local time is presentation-only.

pub mod error;
pub mod julian;
pub mod local;

pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
pub use local::{
    DEFAULT_ZONE, LocalInstant, jd_to_local_datetime, jd_to_local_hm, local_to_jd_utc,
    parse_date, parse_time, parse_zone, utc_offset_hours,
};
