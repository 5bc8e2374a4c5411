//! Muhurtham search: scoring 90-minute slots across the daylight span of
//! a date range for a given ceremony, and the month calendar summary.
//!
//! A slot inherits half of its day's composite score, then takes window
//! penalties (Rahu Kalam, Yamagandam, Kuligai), the Nalla Neram bonus,
//! event-specific limb affinities, and the optional natal-star bonus.

use tracing::warn;

use chrono_tz::Tz;
use jothidam_base::{Ephemeris, GeoPosition, Nakshatra};
use jothidam_time::{LocalInstant, jd_to_local_datetime, jd_to_local_hm};

use crate::error::SearchError;
use crate::muhurtham_types::{ALL_EVENT_TYPES, DaySummary, EventType, MuhurthamSlot};
use crate::panchang;
use crate::panchang_types::{PanchangamDay, WindowKind};

/// Slot length used by the scan.
pub const SLOT_MINUTES: f64 = 90.0;

const SLOT_DAYS: f64 = SLOT_MINUTES / 1440.0;

/// Window penalties and bonuses, in score points.
const RAHU_KALAM_PENALTY: f64 = 25.0;
const YAMAGANDAM_PENALTY: f64 = 15.0;
const KULIGAI_PENALTY: f64 = 10.0;
const NALLA_NERAM_BONUS: f64 = 10.0;
const NATAL_STAR_BONUS: f64 = 10.0;

/// Days in the tara cycle that count as unfavourable from the natal star
/// (vipat, pratyak, naidhana as 1-based remainders of the 9-step count).
fn tara_unfavourable(from: Nakshatra, to: Nakshatra) -> bool {
    let rem = from.count_to(to) % 9;
    matches!(rem, 3 | 5 | 7)
}

/// Event-specific affinity of a day, in score points (can be negative).
fn event_day_affinity(event: EventType, day: &PanchangamDay) -> (f64, Vec<String>) {
    let mut points = 0.0;
    let mut notes = Vec::new();

    // Rikta tithis and Amavasya are avoided for every ceremony; the
    // favoured list varies per event.
    let tithi_number = day.tithi.index % 15 + 1;
    if day.tithi.index == 29 || matches!(tithi_number, 4 | 9 | 14) {
        points -= 5.0;
        notes.push(format!("{} is avoided for ceremonies", day.tithi.name));
    } else if event.favoured_tithis().contains(&tithi_number) {
        points += 5.0;
        notes.push(format!("{} favours {}", day.tithi.name, event.name()));
    }

    if event
        .favoured_nakshatras()
        .contains(&day.nakshatra.nakshatra)
    {
        points += 10.0;
        notes.push(format!(
            "{} is favoured for {}",
            day.nakshatra.nakshatra.name(),
            event.name()
        ));
    }
    if event.favoured_vaaras().contains(&day.vaara) {
        points += 5.0;
        notes.push(format!("{} suits {}", day.vaara.english_name(), event.name()));
    } else if event.avoided_vaaras().contains(&day.vaara) {
        points -= 10.0;
        notes.push(format!(
            "{} is avoided for {}",
            day.vaara.english_name(),
            event.name()
        ));
    }

    (points, notes)
}

/// Score one [start, end) slot against its day.
fn score_slot(
    day: &PanchangamDay,
    event: EventType,
    start_jd: f64,
    end_jd: f64,
    natal_star: Option<Nakshatra>,
) -> (u8, Vec<String>) {
    let mut score = day.score as f64 * 0.5;
    let (affinity, mut notes) = event_day_affinity(event, day);
    score += affinity;

    for window in &day.windows {
        if !window.overlaps(start_jd, end_jd) {
            continue;
        }
        let (delta, label) = match window.kind {
            WindowKind::RahuKalam => (-RAHU_KALAM_PENALTY, "within Rahu Kalam"),
            WindowKind::Yamagandam => (-YAMAGANDAM_PENALTY, "within Yamagandam"),
            WindowKind::Kuligai => (-KULIGAI_PENALTY, "within Kuligai"),
            WindowKind::NallaNeram => (NALLA_NERAM_BONUS, "within Nalla Neram"),
        };
        score += delta;
        notes.push(label.to_string());
    }

    if let Some(star) = natal_star {
        if !tara_unfavourable(star, day.nakshatra.nakshatra) {
            score += NATAL_STAR_BONUS;
            notes.push("day star favourable from the natal star".to_string());
        } else {
            notes.push("day star unfavourable from the natal star".to_string());
        }
    }

    (score.round().clamp(0.0, 100.0) as u8, notes)
}

fn slots_for_day(
    day: &PanchangamDay,
    event: EventType,
    natal_star: Option<Nakshatra>,
) -> Vec<MuhurthamSlot> {
    let mut slots = Vec::new();
    let mut start = day.sunrise_jd;
    while start + SLOT_DAYS <= day.sunset_jd + 1e-9 {
        let end = start + SLOT_DAYS;
        let (score, notes) = score_slot(day, event, start, end, natal_star);
        slots.push(MuhurthamSlot {
            event,
            start_jd: start,
            end_jd: end,
            start_local: jd_to_local_datetime(start, day.utc_offset_hours),
            end_hm: jd_to_local_hm(end, day.utc_offset_hours),
            score,
            day_score: day.score,
            notes,
        });
        start = end;
    }
    slots
}

fn next_civil_day(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
    };
    if day < days_in_month {
        (year, month, day + 1)
    } else if month < 12 {
        (year, month + 1, 1)
    } else {
        (year + 1, 1, 1)
    }
}

/// Find scored slots for a ceremony across an inclusive civil date range.
///
/// Slots are returned best-first; equal scores order by ascending start.
/// The range is scanned day by day and may span months.
pub fn find_slots(
    eph: &dyn Ephemeris,
    from: (i32, u32, u32),
    to: (i32, u32, u32),
    geo: &GeoPosition,
    tz: Tz,
    event: EventType,
    natal_star: Option<Nakshatra>,
) -> Result<Vec<MuhurthamSlot>, SearchError> {
    if from > to {
        return Err(SearchError::InvalidRange(format!(
            "{:04}-{:02}-{:02} is after {:04}-{:02}-{:02}",
            from.0, from.1, from.2, to.0, to.1, to.2
        )));
    }

    let mut slots = Vec::new();
    let (mut y, mut m, mut d) = from;
    loop {
        // One bad day must not abort the whole range; skip it and go on.
        match panchang::calculate(eph, y, m, d, geo, tz) {
            Ok(day) => slots.extend(slots_for_day(&day, event, natal_star)),
            Err(e) => {
                warn!(year = y, month = m, day = d, error = %e, "day computation failed; skipping day in slot scan");
            }
        }
        if (y, m, d) == to {
            break;
        }
        (y, m, d) = next_civil_day(y, m, d);
    }

    slots.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.start_jd.partial_cmp(&b.start_jd).unwrap_or(std::cmp::Ordering::Equal))
    });
    Ok(slots)
}

/// Day-level suitability of each ceremony, best three first.
fn recommend_events(day: &PanchangamDay) -> Vec<(EventType, u8)> {
    let mut ranked: Vec<(EventType, u8)> = ALL_EVENT_TYPES
        .iter()
        .map(|&event| {
            let (affinity, _) = event_day_affinity(event, day);
            let score = (day.score as f64 + affinity).round().clamp(0.0, 100.0) as u8;
            (event, score)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(3);
    ranked
}

/// Summarise every day of a civil month. A day whose computation fails
/// degrades to a neutral score of 50 rather than aborting the calendar.
pub fn month_calendar(
    eph: &dyn Ephemeris,
    year: i32,
    month: u32,
    geo: &GeoPosition,
    tz: Tz,
) -> Result<Vec<DaySummary>, SearchError> {
    if !(1..=12).contains(&month) {
        return Err(SearchError::InvalidRange(format!("month {month}")));
    }

    let mut summaries = Vec::with_capacity(31);
    let (mut y, mut m, mut d) = (year, month, 1);
    while m == month && y == year {
        let summary = match panchang::calculate(eph, y, m, d, geo, tz) {
            Ok(day) => DaySummary {
                date: day.date,
                vaara: day.vaara,
                score: day.score,
                approximate: day.approximate_sun_events,
                recommended: recommend_events(&day),
            },
            Err(e) => {
                warn!(year = y, month = m, day = d, error = %e, "day computation failed; using neutral placeholder");
                DaySummary {
                    date: LocalInstant::midnight(y, m, d),
                    vaara: crate::panchang::vaara_from_jd(
                        jothidam_time::calendar_to_jd(y, m, d as f64 + 0.5),
                    ),
                    score: 50,
                    approximate: true,
                    recommended: Vec::new(),
                }
            }
        };
        summaries.push(summary);
        (y, m, d) = next_civil_day(y, m, d);
    }
    Ok(summaries)
}
