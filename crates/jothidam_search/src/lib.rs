//! Time-keyed searches over the jothidam core: the daily panchangam
//! (five limbs, horizon events, named windows, day score), the
//! Vimshottari dasha timeline, and the muhurtham electional scan.
//!
//! Everything is computed on demand from an [`Ephemeris`] provider;
//! nothing here caches between calls.
//!
//! [`Ephemeris`]: jothidam_base::Ephemeris

pub mod dasha;
pub mod error;
pub mod muhurtham;
pub mod muhurtham_types;
pub mod panchang;
pub mod panchang_types;

pub use dasha::{
    CYCLE_DAYS, DAYS_PER_YEAR, DashaPeriod, VIMSHOTTARI_LORDS, VIMSHOTTARI_YEARS,
    active_antardasha, active_period, antardashas, mahadashas,
};
pub use error::SearchError;
pub use muhurtham::{SLOT_MINUTES, find_slots, month_calendar};
pub use muhurtham_types::{ALL_EVENT_TYPES, DaySummary, EventType, MuhurthamSlot};
pub use panchang::{
    calculate, karana_from_elongation, score_day, tithi_from_elongation, vaara_from_jd,
    yoga_from_sum,
};
pub use panchang_types::{
    ALL_VAARAS, DayWindow, KaranaInfo, NakshatraDayInfo, Paksha, PanchangamDay, ScoreFactor,
    TithiInfo, Vaara, WindowKind, YogaInfo,
};
