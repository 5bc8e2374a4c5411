//! Rashi (zodiac sign) data: the 12 signs of 30 degrees each, their lords,
//! and lookup from sidereal longitude.

use serde::Serialize;

use crate::error::JothidamError;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one rashi: 30 degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries) at sidereal 0 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha .. 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Tamil name, as used in jothidam practice.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesham",
            Self::Vrishabha => "Rishabam",
            Self::Mithuna => "Mithunam",
            Self::Karka => "Katakam",
            Self::Simha => "Simmam",
            Self::Kanya => "Kanni",
            Self::Tula => "Thulam",
            Self::Vrischika => "Viruchigam",
            Self::Dhanu => "Dhanusu",
            Self::Makara => "Magaram",
            Self::Kumbha => "Kumbam",
            Self::Meena => "Meenam",
        }
    }

    /// Western name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Rashi from a 0-based index, wrapping modulo 12.
    pub const fn from_index(idx: u8) -> Self {
        ALL_RASHIS[(idx % 12) as usize]
    }

    /// Planetary lord of the rashi (universal Vedic convention; the nodes
    /// rule no sign).
    pub const fn lord(self) -> Graha {
        match self {
            Self::Mesha | Self::Vrischika => Graha::Mangal,
            Self::Vrishabha | Self::Tula => Graha::Shukra,
            Self::Mithuna | Self::Kanya => Graha::Buddh,
            Self::Karka => Graha::Chandra,
            Self::Simha => Graha::Surya,
            Self::Dhanu | Self::Meena => Graha::Guru,
            Self::Makara | Self::Kumbha => Graha::Shani,
        }
    }

    /// The rashi `count` signs ahead, 1-based (`nth(1)` is self).
    pub const fn nth_from(self, count: u8) -> Self {
        Self::from_index((self.index() + count - 1) % 12)
    }

    /// Parse a rashi from its Sanskrit, Tamil, or Western name.
    pub fn from_name(s: &str) -> Result<Self, JothidamError> {
        let needle = s.trim();
        for r in ALL_RASHIS {
            if r.name().eq_ignore_ascii_case(needle)
                || r.tamil_name().eq_ignore_ascii_case(needle)
                || r.western_name().eq_ignore_ascii_case(needle)
            {
                return Ok(r);
            }
        }
        Err(JothidamError::UnknownRashi(s.to_string()))
    }
}

/// Determine the rashi containing a sidereal longitude, plus the degrees
/// elapsed within it.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> (Rashi, f64) {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / RASHI_SPAN).floor() as u8).min(11);
    (ALL_RASHIS[idx as usize], lon - idx as f64 * RASHI_SPAN)
}
