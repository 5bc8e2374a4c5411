//! Local calendar instants and their resolution to Julian Days in UT.
//!
//! A `LocalInstant` is a wall-clock date/time in some IANA zone. Resolution
//! order: local wall clock → UTC (via `chrono-tz`) → Julian Day. The
//! inverse (`jd_to_local_hm`, `jd_to_local_datetime`) is used only for
//! presenting windows back in local clock time; it rounds to the nearest
//! minute and rolls the day field across midnight.

use chrono::{Datelike, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Default zone when the caller supplies none: Indian Standard Time.
pub const DEFAULT_ZONE: Tz = chrono_tz::Asia::Kolkata;

/// Half a minute expressed in days, for round-to-nearest-minute output.
const HALF_MINUTE_DAYS: f64 = 0.5 / 1440.0;

/// A wall-clock calendar instant, zone supplied separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocalInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl LocalInstant {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given civil date.
    pub fn midnight(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }
}

impl std::fmt::Display for LocalInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Parse a YYYY-MM-DD date string.
pub fn parse_date(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(s.to_string()))?;
    Ok((d.year(), d.month(), d.day()))
}

/// Parse an HH:MM or HH:MM:SS time string.
pub fn parse_time(s: &str) -> Result<(u32, u32), TimeError> {
    let t = NaiveTime::parse_from_str(s.trim(), "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s.trim(), "%H:%M"))
        .map_err(|_| TimeError::InvalidTime(s.to_string()))?;
    Ok((t.hour(), t.minute()))
}

/// Parse an IANA timezone identifier ("Asia/Kolkata").
pub fn parse_zone(s: &str) -> Result<Tz, TimeError> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::UnknownZone(s.to_string()))
}

fn to_naive(local: &LocalInstant) -> Result<NaiveDateTime, TimeError> {
    let date = NaiveDate::from_ymd_opt(local.year, local.month, local.day)
        .ok_or_else(|| TimeError::InvalidDate(local.to_string()))?;
    let time = NaiveTime::from_hms_opt(local.hour, local.minute, local.second.floor() as u32)
        .ok_or_else(|| TimeError::InvalidTime(local.to_string()))?;
    Ok(date.and_time(time))
}

/// Resolve a local wall-clock instant in `tz` to a Julian Day in UT.
///
/// An ambiguous wall-clock time (DST fold) resolves to the earlier
/// occurrence; a nonexistent one (DST gap) is an error.
pub fn local_to_jd_utc(local: &LocalInstant, tz: Tz) -> Result<f64, TimeError> {
    let naive = to_naive(local)?;
    let resolved = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            return Err(TimeError::NonexistentLocalTime(format!(
                "{local} in {tz}"
            )));
        }
    };
    let utc = resolved.with_timezone(&Utc);
    let day_frac = utc.day() as f64
        + utc.hour() as f64 / 24.0
        + utc.minute() as f64 / 1440.0
        + (utc.second() as f64 + local.second.fract()) / 86_400.0;
    Ok(calendar_to_jd(utc.year(), utc.month(), day_frac))
}

/// The UTC offset (hours, east positive) in effect for a local instant.
pub fn utc_offset_hours(local: &LocalInstant, tz: Tz) -> Result<f64, TimeError> {
    let naive = to_naive(local)?;
    let resolved = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => {
            return Err(TimeError::NonexistentLocalTime(format!(
                "{local} in {tz}"
            )));
        }
    };
    Ok(resolved.offset().fix().local_minus_utc() as f64 / 3600.0)
}

/// Convert a Julian Day in UT to local (hour, minute), rounded to the
/// nearest minute.
pub fn jd_to_local_hm(jd_utc: f64, utc_offset_hours: f64) -> (u32, u32) {
    let local = jd_utc + utc_offset_hours / 24.0 + HALF_MINUTE_DAYS;
    // JD days start at noon; shift by 0.5 to get the civil-day fraction.
    let day_frac = (local + 0.5).fract();
    let minutes = (day_frac * 1440.0).floor() as u32 % 1440;
    (minutes / 60, minutes % 60)
}

/// Convert a Julian Day in UT to a full local calendar instant, rounded
/// to the nearest minute. Crossing midnight rolls the date.
pub fn jd_to_local_datetime(jd_utc: f64, utc_offset_hours: f64) -> LocalInstant {
    let local = jd_utc + utc_offset_hours / 24.0 + HALF_MINUTE_DAYS;
    let (year, month, day_frac) = jd_to_calendar(local);
    let day = day_frac.floor() as u32;
    let minutes = (day_frac.fract() * 1440.0).floor() as u32 % 1440;
    LocalInstant::new(year, month, day, minutes / 60, minutes % 60, 0.0)
}
