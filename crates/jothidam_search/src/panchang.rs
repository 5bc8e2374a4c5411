//! Panchangam calculation: the five daily limbs (tithi, nakshatra, yoga,
//! karana, vaara), sunrise/sunset, the named daylight windows (Rahu Kalam,
//! Yamagandam, Kuligai, Nalla Neram), and the composite day score.
//!
//! Angular classifications each use their own divisor of the circle:
//! tithi = Moon−Sun elongation / 12 deg, yoga = (Moon+Sun) / (360/27),
//! karana = elongation / 6 deg, nakshatra = Moon longitude / (360/27).

use tracing::warn;

use jothidam_base::{
    Body, Ephemeris, GeoPosition, Nakshatra, nakshatra_from_longitude, normalize_360,
};
use jothidam_time::{LocalInstant, jd_to_local_hm, local_to_jd_utc, utc_offset_hours};
use chrono_tz::Tz;

use crate::error::SearchError;
use crate::panchang_types::{
    ALL_VAARAS, DayWindow, KaranaInfo, NakshatraDayInfo, Paksha, PanchangamDay, ScoreFactor,
    TithiInfo, Vaara, WindowKind, YogaInfo,
};

/// One tithi spans 12 deg of Moon-Sun elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// One yoga spans 360/27 deg of the Sun+Moon longitude sum.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// One karana spans 6 deg of elongation (half a tithi).
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The 15 tithi names of one paksha. The 15th is Purnima in the waxing
/// half and Amavasya in the waning half.
const TITHI_NAMES: [&str; 15] = [
    "Prathama",
    "Dvitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

/// The 27 yoga names in order.
const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shoola",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// The 7 movable karana names, cycling through slots 1-56.
const MOVABLE_KARANAS: [&str; 7] = [
    "Bava", "Balava", "Kaulava", "Taitila", "Garaja", "Vanija", "Vishti",
];

/// Inauspicious yogas (0-based index into [`YOGA_NAMES`]).
const HARSH_YOGAS: [u8; 8] = [5, 8, 9, 12, 14, 16, 18, 26];

/// Which daylight eighth (0-7) each named period claims, indexed by
/// weekday (0 = Sunday). Traditional Tamil almanac tables.
const RAHU_KALAM_SEGMENT: [u8; 7] = [7, 1, 6, 4, 5, 3, 2];
const YAMAGANDAM_SEGMENT: [u8; 7] = [4, 3, 2, 1, 0, 6, 5];
const KULIGAI_SEGMENT: [u8; 7] = [6, 5, 4, 3, 2, 1, 0];

/// Determine the tithi from Moon-Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let delta = normalize_360(elongation_deg);
    let index = ((delta / TITHI_SEGMENT_DEG).floor() as u8).min(29);
    let paksha = if delta < 180.0 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    let name = if index == 29 {
        "Amavasya"
    } else {
        TITHI_NAMES[(index % 15) as usize]
    };
    let elapsed_percent = (delta - index as f64 * TITHI_SEGMENT_DEG) / TITHI_SEGMENT_DEG * 100.0;
    TithiInfo {
        index,
        name,
        paksha,
        elapsed_percent,
    }
}

/// Determine the yoga from the (Moon + Sun) sidereal longitude sum.
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let sum = normalize_360(sum_deg);
    let index = ((sum / YOGA_SEGMENT_DEG).floor() as u8).min(26);
    let elapsed_percent = (sum - index as f64 * YOGA_SEGMENT_DEG) / YOGA_SEGMENT_DEG * 100.0;
    YogaInfo {
        index,
        name: YOGA_NAMES[index as usize],
        elapsed_percent,
    }
}

/// Determine the karana (half-tithi) from Moon-Sun elongation.
///
/// Slot 0 is the fixed Kimstughna; slots 1-56 cycle the seven movable
/// karanas; slots 57-59 are the fixed Shakuni, Chatushpada, and Naga.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let delta = normalize_360(elongation_deg);
    let index = ((delta / KARANA_SEGMENT_DEG).floor() as u8).min(59);
    let name = match index {
        0 => "Kimstughna",
        57 => "Shakuni",
        58 => "Chatushpada",
        59 => "Naga",
        i => MOVABLE_KARANAS[((i - 1) % 7) as usize],
    };
    KaranaInfo { index, name }
}

/// Weekday from a Julian Day whose civil date is wanted (0 = Sunday).
pub fn vaara_from_jd(jd: f64) -> Vaara {
    let dow = ((jd + 1.5).floor() as i64).rem_euclid(7) as usize;
    ALL_VAARAS[dow]
}

/// Sidereal longitudes of the Sun and Moon at `jd`.
fn sun_moon_sidereal(
    eph: &dyn Ephemeris,
    jd: f64,
) -> Result<(f64, f64), SearchError> {
    let aya = eph.ayanamsha_deg(jd);
    let sun = eph
        .tropical_position(Body::Sun, jd)
        .map_err(jothidam_base::JothidamError::from)?;
    let moon = eph
        .tropical_position(Body::Moon, jd)
        .map_err(jothidam_base::JothidamError::from)?;
    Ok((
        normalize_360(sun.longitude_deg - aya),
        normalize_360(moon.longitude_deg - aya),
    ))
}

/// Sunrise/sunset for the civil day, with the documented degrade policy:
/// a provider failure or a no-event day (polar latitudes) falls back to
/// 06:00/18:00 local.
fn sun_events(
    eph: &dyn Ephemeris,
    year: i32,
    month: u32,
    day: u32,
    geo: &GeoPosition,
    tz: Tz,
) -> Result<(f64, f64, bool), SearchError> {
    let noon = LocalInstant::new(year, month, day, 12, 0, 0.0);
    let jd_noon = local_to_jd_utc(&noon, tz)?;

    let mut approximate = false;
    let mut event_jd = |event, fallback_hour| -> Result<f64, SearchError> {
        let found = match eph.rise_transit(jd_noon, event, geo) {
            Ok(found) => found,
            Err(e) => {
                warn!(year, month, day, error = %e, "rise/set search failed; using approximate window");
                None
            }
        };
        match found {
            Some(jd) => Ok(jd),
            None => {
                approximate = true;
                let local = LocalInstant::new(year, month, day, fallback_hour, 0, 0.0);
                Ok(local_to_jd_utc(&local, tz)?)
            }
        }
    };

    let sunrise = event_jd(jothidam_base::RiseEvent::Sunrise, 6)?;
    let sunset = event_jd(jothidam_base::RiseEvent::Sunset, 18)?;
    Ok((sunrise, sunset, approximate))
}

/// Partition the daylight span into eight equal segments and build the
/// named windows for the weekday.
fn day_windows(
    sunrise_jd: f64,
    sunset_jd: f64,
    vaara: Vaara,
    utc_offset: f64,
) -> Vec<DayWindow> {
    let eighth = (sunset_jd - sunrise_jd) / 8.0;
    let segment_bounds =
        |i: u8| -> (f64, f64) { (sunrise_jd + i as f64 * eighth, sunrise_jd + (i + 1) as f64 * eighth) };
    let make = |kind, start: f64, end: f64| DayWindow {
        kind,
        start_jd: start,
        end_jd: end,
        start_hm: jd_to_local_hm(start, utc_offset),
        end_hm: jd_to_local_hm(end, utc_offset),
    };

    let w = vaara.index() as usize;
    let occupied = [
        (WindowKind::RahuKalam, RAHU_KALAM_SEGMENT[w]),
        (WindowKind::Yamagandam, YAMAGANDAM_SEGMENT[w]),
        (WindowKind::Kuligai, KULIGAI_SEGMENT[w]),
    ];

    let mut windows = Vec::with_capacity(6);
    for (kind, seg) in occupied {
        let (start, end) = segment_bounds(seg);
        windows.push(make(kind, start, end));
    }

    // Nalla Neram: merge the remaining eighths into contiguous runs.
    let mut run_start: Option<u8> = None;
    for i in 0..=8u8 {
        let free = i < 8 && !occupied.iter().any(|&(_, seg)| seg == i);
        match (free, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(s)) => {
                let (start, _) = segment_bounds(s);
                let (_, end) = segment_bounds(i - 1);
                windows.push(make(WindowKind::NallaNeram, start, end));
                run_start = None;
            }
            _ => {}
        }
    }

    windows
}

fn tithi_factor(tithi: &TithiInfo) -> ScoreFactor {
    // Rikta tithis (Chaturthi, Navami, Chaturdashi) and Amavasya score
    // low; Purnima is strong; the rest are serviceable.
    let in_paksha = tithi.index % 15;
    let (points, why) = if tithi.index == 29 {
        (5.0, "Amavasya")
    } else if matches!(in_paksha, 3 | 8 | 13) {
        (8.0, "rikta tithi")
    } else if in_paksha == 14 {
        (28.0, "Purnima")
    } else if matches!(in_paksha, 1 | 2 | 4 | 6 | 9 | 10 | 12) {
        (30.0, "auspicious tithi")
    } else {
        (18.0, "neutral tithi")
    };
    ScoreFactor {
        factor: "tithi",
        points,
        max_points: 30.0,
        description: format!("{} ({})", tithi.name, why),
    }
}

fn nakshatra_factor(info: &NakshatraDayInfo) -> ScoreFactor {
    use Nakshatra::*;
    let benefic = matches!(
        info.nakshatra,
        Rohini
            | Mrigashira
            | Punarvasu
            | Pushya
            | UttaraPhalguni
            | Hasta
            | Chitra
            | Swati
            | Anuradha
            | UttaraAshadha
            | Shravana
            | Dhanishtha
            | UttaraBhadrapada
            | Revati
    );
    let harsh = matches!(
        info.nakshatra,
        Bharani | Krittika | Ardra | Ashlesha | Magha | Jyeshtha | Mula | Shatabhisha
    );
    let (points, why) = if benefic {
        (30.0, "benefic star")
    } else if harsh {
        (8.0, "harsh star")
    } else {
        (18.0, "neutral star")
    };
    ScoreFactor {
        factor: "nakshatra",
        points,
        max_points: 30.0,
        description: format!("{} ({})", info.nakshatra.name(), why),
    }
}

fn yoga_factor(yoga: &YogaInfo) -> ScoreFactor {
    let harsh = HARSH_YOGAS.contains(&yoga.index);
    ScoreFactor {
        factor: "yoga",
        points: if harsh { 5.0 } else { 25.0 },
        max_points: 25.0,
        description: format!(
            "{} ({})",
            yoga.name,
            if harsh { "inauspicious yoga" } else { "favourable yoga" }
        ),
    }
}

fn vaara_factor(vaara: Vaara) -> ScoreFactor {
    let benefic = matches!(vaara, Vaara::Soma | Vaara::Budha | Vaara::Guru | Vaara::Shukra);
    ScoreFactor {
        factor: "vaara",
        points: if benefic { 15.0 } else { 5.0 },
        max_points: 15.0,
        description: vaara.english_name().to_string(),
    }
}

/// Score a day from its limbs. Returns the composite (0-100) and the
/// breakdown whose points sum to it exactly.
pub fn score_day(
    tithi: &TithiInfo,
    nakshatra: &NakshatraDayInfo,
    yoga: &YogaInfo,
    vaara: Vaara,
) -> (u8, Vec<ScoreFactor>) {
    let breakdown = vec![
        tithi_factor(tithi),
        nakshatra_factor(nakshatra),
        yoga_factor(yoga),
        vaara_factor(vaara),
    ];
    let total: f64 = breakdown.iter().map(|f| f.points).sum();
    (total.round().clamp(0.0, 100.0) as u8, breakdown)
}

/// Compute the full panchangam for one civil date and location.
///
/// The limbs are evaluated at the sunrise instant, following almanac
/// convention. Rise/set failures degrade to the approximate 06:00/18:00
/// window (`approximate_sun_events`).
pub fn calculate(
    eph: &dyn Ephemeris,
    year: i32,
    month: u32,
    day: u32,
    geo: &GeoPosition,
    tz: Tz,
) -> Result<PanchangamDay, SearchError> {
    let date = LocalInstant::midnight(year, month, day);
    let utc_offset = utc_offset_hours(&date, tz)?;

    let (sunrise_jd, sunset_jd, approximate) = sun_events(eph, year, month, day, geo, tz)?;

    let (sun, moon) = sun_moon_sidereal(eph, sunrise_jd)?;
    let tithi = tithi_from_elongation(moon - sun);
    let yoga = yoga_from_sum(moon + sun);
    let karana = karana_from_elongation(moon - sun);
    let nak = nakshatra_from_longitude(moon);
    let nakshatra = NakshatraDayInfo {
        nakshatra: nak.nakshatra,
        index: nak.index,
        pada: nak.pada,
        elapsed_percent: nak.elapsed_fraction * 100.0,
    };

    // Weekday of the local civil date.
    let vaara = vaara_from_jd(local_to_jd_utc(&LocalInstant::new(year, month, day, 12, 0, 0.0), tz)? + utc_offset / 24.0);

    let windows = day_windows(sunrise_jd, sunset_jd, vaara, utc_offset);
    let (score, breakdown) = score_day(&tithi, &nakshatra, &yoga, vaara);

    Ok(PanchangamDay {
        date,
        tithi,
        nakshatra,
        yoga,
        karana,
        vaara,
        sunrise_jd,
        sunset_jd,
        sunrise_hm: jd_to_local_hm(sunrise_jd, utc_offset),
        sunset_hm: jd_to_local_hm(sunset_jd, utc_offset),
        approximate_sun_events: approximate,
        utc_offset_hours: utc_offset,
        windows,
        score,
        breakdown,
    })
}
