//! The nine grahas and their fixed classification tables: dignity
//! (exaltation, debilitation, own signs) and natural friendship.
//!
//! All tables are process-wide read-only constants from standard jothidam
//! convention (BPHS).

use serde::Serialize;

use crate::error::JothidamError;
use crate::rashi::Rashi;

/// The 9 grahas of classical jothidam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Relation {
    Friend,
    Neutral,
    Enemy,
}

impl Graha {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Whether this is one of the lunar nodes (no rise/set, no sign
    /// rulership, retrograde by convention).
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Exaltation rashi. Node exaltations follow the common south-Indian
    /// convention (Rahu in Vrishabha, Ketu in Vrischika).
    pub const fn exaltation(self) -> Rashi {
        match self {
            Self::Surya => Rashi::Mesha,
            Self::Chandra => Rashi::Vrishabha,
            Self::Mangal => Rashi::Makara,
            Self::Buddh => Rashi::Kanya,
            Self::Guru => Rashi::Karka,
            Self::Shukra => Rashi::Meena,
            Self::Shani => Rashi::Tula,
            Self::Rahu => Rashi::Vrishabha,
            Self::Ketu => Rashi::Vrischika,
        }
    }

    /// Debilitation rashi: always the 7th from exaltation.
    pub const fn debilitation(self) -> Rashi {
        self.exaltation().nth_from(7)
    }

    /// Whether the graha rules the given rashi.
    pub fn owns(self, rashi: Rashi) -> bool {
        !self.is_node() && rashi.lord() == self
    }

    /// Natural relationship toward another graha (BPHS friendship table;
    /// nodes follow the common shadow-planet convention).
    pub fn relation_to(self, other: Graha) -> Relation {
        use Graha::*;
        if self == other {
            return Relation::Friend;
        }
        match self {
            Surya => match other {
                Chandra | Mangal | Guru => Relation::Friend,
                Shukra | Shani | Rahu | Ketu => Relation::Enemy,
                _ => Relation::Neutral,
            },
            Chandra => match other {
                Surya | Buddh => Relation::Friend,
                _ => Relation::Neutral,
            },
            Mangal => match other {
                Surya | Chandra | Guru => Relation::Friend,
                Buddh | Rahu => Relation::Enemy,
                _ => Relation::Neutral,
            },
            Buddh => match other {
                Surya | Shukra | Rahu => Relation::Friend,
                Chandra => Relation::Enemy,
                _ => Relation::Neutral,
            },
            Guru => match other {
                Surya | Chandra | Mangal => Relation::Friend,
                Buddh | Shukra => Relation::Enemy,
                _ => Relation::Neutral,
            },
            Shukra => match other {
                Buddh | Shani | Rahu | Ketu => Relation::Friend,
                Surya | Chandra => Relation::Enemy,
                _ => Relation::Neutral,
            },
            Shani => match other {
                Buddh | Shukra | Rahu => Relation::Friend,
                Surya | Chandra | Mangal => Relation::Enemy,
                _ => Relation::Neutral,
            },
            Rahu => match other {
                Buddh | Shukra | Shani => Relation::Friend,
                Surya | Chandra | Mangal => Relation::Enemy,
                _ => Relation::Neutral,
            },
            Ketu => match other {
                Mangal | Shukra | Shani => Relation::Friend,
                Surya | Chandra => Relation::Enemy,
                _ => Relation::Neutral,
            },
        }
    }

    /// Parse a graha from its Sanskrit or English name.
    pub fn from_name(s: &str) -> Result<Self, JothidamError> {
        let needle = s.trim();
        for g in ALL_GRAHAS {
            if g.name().eq_ignore_ascii_case(needle) || g.english_name().eq_ignore_ascii_case(needle)
            {
                return Ok(g);
            }
        }
        Err(JothidamError::UnknownGraha(s.to_string()))
    }
}
