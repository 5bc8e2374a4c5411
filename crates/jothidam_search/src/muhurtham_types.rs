//! Result types for the muhurtham (electional) search.

use serde::Serialize;

use jothidam_base::Nakshatra;
use jothidam_time::LocalInstant;

use crate::panchang_types::Vaara;

/// Ceremonies the electional search can score for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventType {
    Marriage,
    GrihaPravesham,
    Travel,
    BusinessOpening,
    VehiclePurchase,
    NamingCeremony,
}

/// All supported event types.
pub const ALL_EVENT_TYPES: [EventType; 6] = [
    EventType::Marriage,
    EventType::GrihaPravesham,
    EventType::Travel,
    EventType::BusinessOpening,
    EventType::VehiclePurchase,
    EventType::NamingCeremony,
];

impl EventType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Marriage => "Marriage",
            Self::GrihaPravesham => "Griha Pravesham",
            Self::Travel => "Travel",
            Self::BusinessOpening => "Business Opening",
            Self::VehiclePurchase => "Vehicle Purchase",
            Self::NamingCeremony => "Naming Ceremony",
        }
    }

    /// Stars traditionally favoured for the ceremony.
    pub fn favoured_nakshatras(self) -> &'static [Nakshatra] {
        use Nakshatra::*;
        match self {
            Self::Marriage => &[
                Rohini,
                Mrigashira,
                Magha,
                UttaraPhalguni,
                Hasta,
                Swati,
                Anuradha,
                Mula,
                UttaraAshadha,
                UttaraBhadrapada,
                Revati,
            ],
            Self::GrihaPravesham => &[
                Rohini,
                Mrigashira,
                Pushya,
                UttaraPhalguni,
                Hasta,
                Chitra,
                Anuradha,
                UttaraAshadha,
                Shravana,
                UttaraBhadrapada,
                Revati,
            ],
            Self::Travel => &[
                Ashwini, Mrigashira, Punarvasu, Pushya, Hasta, Anuradha, Shravana, Dhanishtha,
                Revati,
            ],
            Self::BusinessOpening => &[
                Ashwini,
                Rohini,
                Pushya,
                UttaraPhalguni,
                Hasta,
                Chitra,
                Anuradha,
                UttaraAshadha,
                Shravana,
                Revati,
            ],
            Self::VehiclePurchase => &[
                Ashwini, Rohini, Mrigashira, Punarvasu, Pushya, Hasta, Chitra, Swati, Shravana,
                Dhanishtha, Revati,
            ],
            Self::NamingCeremony => &[
                Ashwini,
                Rohini,
                Mrigashira,
                Punarvasu,
                Pushya,
                UttaraPhalguni,
                Hasta,
                Swati,
                Anuradha,
                Shravana,
                Revati,
            ],
        }
    }

    /// Lunar days that strengthen the ceremony, as 1-based tithi numbers
    /// within either paksha (1 = Prathama .. 15 = Purnima/Amavasya).
    pub fn favoured_tithis(self) -> &'static [u8] {
        match self {
            Self::Marriage => &[2, 3, 5, 7, 10, 11, 13],
            Self::GrihaPravesham => &[2, 3, 5, 6, 7, 10, 11, 13],
            Self::Travel => &[2, 3, 5, 7, 10, 11],
            Self::BusinessOpening => &[1, 2, 3, 5, 7, 10, 11, 13],
            Self::VehiclePurchase => &[2, 3, 5, 6, 7, 10, 11],
            Self::NamingCeremony => &[2, 3, 5, 6, 7, 10, 11, 12],
        }
    }

    /// Weekdays that strengthen the ceremony.
    pub fn favoured_vaaras(self) -> &'static [Vaara] {
        match self {
            Self::Marriage => &[Vaara::Soma, Vaara::Budha, Vaara::Guru, Vaara::Shukra],
            Self::GrihaPravesham => &[Vaara::Soma, Vaara::Budha, Vaara::Guru, Vaara::Shukra],
            Self::Travel => &[Vaara::Soma, Vaara::Budha, Vaara::Guru, Vaara::Shukra],
            Self::BusinessOpening => &[Vaara::Budha, Vaara::Guru, Vaara::Shukra, Vaara::Ravi],
            Self::VehiclePurchase => &[Vaara::Soma, Vaara::Budha, Vaara::Guru, Vaara::Shukra],
            Self::NamingCeremony => &[Vaara::Soma, Vaara::Budha, Vaara::Guru, Vaara::Shukra],
        }
    }

    /// Weekdays to avoid for the ceremony.
    pub fn avoided_vaaras(self) -> &'static [Vaara] {
        match self {
            Self::Marriage => &[Vaara::Mangala, Vaara::Shani],
            Self::GrihaPravesham => &[Vaara::Mangala, Vaara::Ravi],
            Self::Travel => &[Vaara::Mangala, Vaara::Shani],
            Self::BusinessOpening => &[Vaara::Mangala],
            Self::VehiclePurchase => &[Vaara::Mangala, Vaara::Shani],
            Self::NamingCeremony => &[Vaara::Mangala, Vaara::Shani],
        }
    }
}

/// One candidate slot returned by the electional search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuhurthamSlot {
    pub event: EventType,
    /// JD UT of the slot start.
    pub start_jd: f64,
    /// JD UT of the slot end.
    pub end_jd: f64,
    /// Local calendar instant of the slot start.
    pub start_local: LocalInstant,
    /// Local wall clock (hour, minute) of the slot end.
    pub end_hm: (u32, u32),
    /// Slot quality, 0-100.
    pub score: u8,
    /// Composite score of the hosting day.
    pub day_score: u8,
    /// Human-readable scoring notes ("within Rahu Kalam", ...).
    pub notes: Vec<String>,
}

/// One row of the month calendar: a day with its composite score and
/// the best-suited ceremonies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: LocalInstant,
    pub vaara: Vaara,
    pub score: u8,
    /// True when the day degraded to the neutral placeholder because
    /// the underlying computation failed.
    pub approximate: bool,
    /// Up to three event types ranked by their day-level suitability.
    pub recommended: Vec<(EventType, u8)>,
}
