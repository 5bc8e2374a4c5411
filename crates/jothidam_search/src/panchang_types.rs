//! Result types for the panchangam calculator.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use jothidam_base::Nakshatra;
use jothidam_time::LocalInstant;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Paksha {
    /// Waxing fortnight (new moon → full moon).
    Shukla,
    /// Waning fortnight (full moon → new moon).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The lunar day: one of 30 segments of 12 deg Moon-Sun elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    /// 0-29 across the whole lunation.
    pub index: u8,
    pub name: &'static str,
    pub paksha: Paksha,
    /// Percent of the tithi already elapsed, [0, 100).
    pub elapsed_percent: f64,
}

impl Display for TithiInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.paksha.name(), self.name)
    }
}

/// Moon's nakshatra for the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraDayInfo {
    pub nakshatra: Nakshatra,
    /// 0-26.
    pub index: u8,
    /// 1-4.
    pub pada: u8,
    /// Percent of the nakshatra already traversed, [0, 100).
    pub elapsed_percent: f64,
}

impl Display for NakshatraDayInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} pada {}", self.nakshatra.name(), self.pada)
    }
}

/// Luni-solar yoga: one of 27 segments of the Sun+Moon longitude sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaInfo {
    /// 0-26.
    pub index: u8,
    pub name: &'static str,
    pub elapsed_percent: f64,
}

impl Display for YogaInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Half-tithi: one of 60 segments of 6 deg elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaInfo {
    /// 0-59.
    pub index: u8,
    pub name: &'static str,
}

impl Display for KaranaInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// The weekday (vaara), 0 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Vaara {
    Ravi,
    Soma,
    Mangala,
    Budha,
    Guru,
    Shukra,
    Shani,
}

/// All seven vaaras in order, Sunday first.
pub const ALL_VAARAS: [Vaara; 7] = [
    Vaara::Ravi,
    Vaara::Soma,
    Vaara::Mangala,
    Vaara::Budha,
    Vaara::Guru,
    Vaara::Shukra,
    Vaara::Shani,
];

impl Vaara {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravi => "Ravivaram",
            Self::Soma => "Somavaram",
            Self::Mangala => "Mangalavaram",
            Self::Budha => "Budhavaram",
            Self::Guru => "Guruvaram",
            Self::Shukra => "Shukravaram",
            Self::Shani => "Shanivaram",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravi => "Sunday",
            Self::Soma => "Monday",
            Self::Mangala => "Tuesday",
            Self::Budha => "Wednesday",
            Self::Guru => "Thursday",
            Self::Shukra => "Friday",
            Self::Shani => "Saturday",
        }
    }

    /// 0-based index, 0 = Sunday.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Named daylight windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WindowKind {
    RahuKalam,
    Yamagandam,
    Kuligai,
    NallaNeram,
}

impl WindowKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKalam => "Rahu Kalam",
            Self::Yamagandam => "Yamagandam",
            Self::Kuligai => "Kuligai",
            Self::NallaNeram => "Nalla Neram",
        }
    }

    /// Whether the window is to be avoided.
    pub const fn inauspicious(self) -> bool {
        !matches!(self, Self::NallaNeram)
    }
}

/// One named sub-window of the daylight span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayWindow {
    pub kind: WindowKind,
    /// JD UT of the window start.
    pub start_jd: f64,
    /// JD UT of the window end.
    pub end_jd: f64,
    /// Local wall clock (hour, minute) of the start.
    pub start_hm: (u32, u32),
    /// Local wall clock (hour, minute) of the end.
    pub end_hm: (u32, u32),
}

impl DayWindow {
    /// Whether a [start, end) JD interval overlaps this window.
    pub fn overlaps(&self, start_jd: f64, end_jd: f64) -> bool {
        start_jd < self.end_jd && end_jd > self.start_jd
    }
}

/// One line of the composite day-score decomposition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreFactor {
    pub factor: &'static str,
    pub points: f64,
    pub max_points: f64,
    pub description: String,
}

/// The five daily limbs plus horizon events, named windows, and the
/// composite day score. One per (date, location); recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangamDay {
    /// Local civil date (midnight instant).
    pub date: LocalInstant,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraDayInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub vaara: Vaara,
    /// JD UT of sunrise (possibly the documented 06:00 fallback).
    pub sunrise_jd: f64,
    /// JD UT of sunset (possibly the documented 18:00 fallback).
    pub sunset_jd: f64,
    pub sunrise_hm: (u32, u32),
    pub sunset_hm: (u32, u32),
    /// True when rise/set fell back to the approximate 06:00/18:00 window.
    pub approximate_sun_events: bool,
    /// UTC offset (hours) used for the local clock fields.
    pub utc_offset_hours: f64,
    pub windows: Vec<DayWindow>,
    /// Composite day quality, 0-100.
    pub score: u8,
    /// Decomposition of `score`; contributions sum to it exactly.
    pub breakdown: Vec<ScoreFactor>,
}

impl PanchangamDay {
    /// All windows of one kind.
    pub fn windows_of(&self, kind: WindowKind) -> impl Iterator<Item = &DayWindow> {
        self.windows.iter().filter(move |w| w.kind == kind)
    }
}
