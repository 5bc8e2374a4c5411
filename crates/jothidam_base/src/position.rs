//! Sidereal planet positions and chart resolution.
//!
//! `position_of` turns one provider query into a full `PlanetPosition`:
//! sidereal longitude, rashi, nakshatra/pada, retrograde flag, and the
//! dignity strength score. `chart_at` assembles all nine grahas plus the
//! lagna into an immutable `Chart` for one instant and location.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::ephemeris::{Body, EclipticState, Ephemeris};
use crate::error::JothidamError;
use crate::geo::GeoPosition;
use crate::graha::Graha;
use crate::lagna::lagna_rashi;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::{format_dms, normalize_360};

/// Sidereal position of one graha at one instant. Derived, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Sidereal ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Longitudinal speed in degrees per day.
    pub speed_deg_per_day: f64,
    pub rashi: Rashi,
    /// Degrees elapsed within the rashi [0, 30).
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    /// Pada within the nakshatra, 1-4.
    pub pada: u8,
    pub retrograde: bool,
    /// Dignity-derived strength, 0-100.
    pub strength: u8,
}

impl Display for PlanetPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.graha.name(),
            format_dms(self.degrees_in_rashi),
            self.rashi.name()
        )?;
        if self.retrograde {
            write!(f, " (R)")?;
        }
        Ok(())
    }
}

/// Dignity strength heuristic.
///
/// Base 50; +30 exalted / -25 debilitated; +20 in an owned sign;
/// -10 retrograde (nodes exempt, they are always retrograde by
/// convention); clamped to [0, 100].
pub fn dignity_strength(graha: Graha, rashi: Rashi, retrograde: bool) -> u8 {
    let mut score: i32 = 50;
    if rashi == graha.exaltation() {
        score += 30;
    } else if rashi == graha.debilitation() {
        score -= 25;
    }
    if graha.owns(rashi) {
        score += 20;
    }
    if retrograde && !graha.is_node() {
        score -= 10;
    }
    score.clamp(0, 100) as u8
}

fn graha_body(graha: Graha) -> Body {
    match graha {
        Graha::Surya => Body::Sun,
        Graha::Chandra => Body::Moon,
        Graha::Mangal => Body::Mars,
        Graha::Buddh => Body::Mercury,
        Graha::Guru => Body::Jupiter,
        Graha::Shukra => Body::Venus,
        Graha::Shani => Body::Saturn,
        Graha::Rahu | Graha::Ketu => Body::MeanNode,
    }
}

/// Tropical state for a graha, deriving Ketu from the ascending node.
fn graha_state(
    eph: &dyn Ephemeris,
    graha: Graha,
    jd: f64,
) -> Result<EclipticState, JothidamError> {
    let state = eph.tropical_position(graha_body(graha), jd)?;
    if graha == Graha::Ketu {
        Ok(EclipticState {
            longitude_deg: normalize_360(state.longitude_deg + 180.0),
            latitude_deg: -state.latitude_deg,
            speed_deg_per_day: state.speed_deg_per_day,
        })
    } else {
        Ok(state)
    }
}

/// Resolve one graha's full sidereal position at `jd`.
pub fn position_of(
    eph: &dyn Ephemeris,
    graha: Graha,
    jd: f64,
) -> Result<PlanetPosition, JothidamError> {
    let state = graha_state(eph, graha, jd)?;
    let sidereal = normalize_360(state.longitude_deg - eph.ayanamsha_deg(jd));
    let (rashi, degrees_in_rashi) = rashi_from_longitude(sidereal);
    let nak = nakshatra_from_longitude(sidereal);
    let retrograde = graha.is_node() || state.speed_deg_per_day < 0.0;

    Ok(PlanetPosition {
        graha,
        longitude_deg: sidereal,
        latitude_deg: state.latitude_deg,
        speed_deg_per_day: state.speed_deg_per_day,
        rashi,
        degrees_in_rashi,
        nakshatra: nak.nakshatra,
        nakshatra_index: nak.index,
        pada: nak.pada,
        retrograde,
        strength: dignity_strength(graha, rashi, retrograde),
    })
}

/// All nine positions plus the lagna, tied to one instant and location.
///
/// Regenerating for a new instant produces a new chart; nothing here is
/// ever mutated in place.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub jd: f64,
    pub location: GeoPosition,
    pub lagna: Rashi,
    pub positions: [PlanetPosition; 9],
}

impl Chart {
    /// The position record for a graha.
    pub fn position(&self, graha: Graha) -> &PlanetPosition {
        &self.positions[graha.index() as usize]
    }

    /// House (bhava) a graha occupies, counted from the lagna (1-12,
    /// whole-sign houses).
    pub fn house_of(&self, graha: Graha) -> u8 {
        house_from(self.lagna, self.position(graha).rashi)
    }

    /// Moon's sidereal longitude; drives nakshatra, dasha, and transit math.
    pub fn moon_longitude(&self) -> f64 {
        self.position(Graha::Chandra).longitude_deg
    }

    /// Moon's nakshatra (the janma nakshatra when this is a birth chart).
    pub fn moon_nakshatra(&self) -> Nakshatra {
        self.position(Graha::Chandra).nakshatra
    }

    /// Moon's rashi (janma rasi).
    pub fn moon_rashi(&self) -> Rashi {
        self.position(Graha::Chandra).rashi
    }
}

/// Whole-sign house of `occupied` counted from `reference` (1-12).
pub fn house_from(reference: Rashi, occupied: Rashi) -> u8 {
    ((occupied.index() + 12 - reference.index()) % 12) + 1
}

/// Generate the chart for one instant and location.
pub fn chart_at(
    eph: &dyn Ephemeris,
    jd: f64,
    location: GeoPosition,
) -> Result<Chart, JothidamError> {
    let p = |graha| position_of(eph, graha, jd);
    // Slot order follows Graha::index, same as ALL_GRAHAS.
    let positions = [
        p(Graha::Surya)?,
        p(Graha::Chandra)?,
        p(Graha::Mangal)?,
        p(Graha::Buddh)?,
        p(Graha::Guru)?,
        p(Graha::Shukra)?,
        p(Graha::Shani)?,
        p(Graha::Rahu)?,
        p(Graha::Ketu)?,
    ];

    Ok(Chart {
        jd,
        location,
        lagna: lagna_rashi(eph, jd, &location),
        positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{EphemerisError, RiseEvent};
    use crate::graha::ALL_GRAHAS;

    /// Stub provider: fixed longitudes and speeds per body, zero ayanamsha.
    struct StubEphemeris;

    impl Ephemeris for StubEphemeris {
        fn tropical_position(&self, body: Body, _jd: f64) -> Result<EclipticState, EphemerisError> {
            let (lon, speed) = match body {
                Body::Sun => (100.0, 0.9856),
                Body::Moon => (220.0, 13.18),
                Body::Mercury => (95.0, -1.2),
                Body::Venus => (130.0, 1.2),
                Body::Mars => (280.0, 0.5),
                Body::Jupiter => (95.0, 0.08),
                Body::Saturn => (185.0, 0.03),
                Body::MeanNode => (35.0, -0.0529),
            };
            Ok(EclipticState {
                longitude_deg: lon,
                latitude_deg: 0.0,
                speed_deg_per_day: speed,
            })
        }

        fn ayanamsha_deg(&self, _jd: f64) -> f64 {
            0.0
        }

        fn rise_transit(
            &self,
            _: f64,
            _: RiseEvent,
            _: &GeoPosition,
        ) -> Result<Option<f64>, EphemerisError> {
            Ok(None)
        }
    }

    #[test]
    fn ketu_opposes_rahu() {
        let eph = StubEphemeris;
        let rahu = position_of(&eph, Graha::Rahu, 0.0).unwrap();
        let ketu = position_of(&eph, Graha::Ketu, 0.0).unwrap();
        let diff = normalize_360(ketu.longitude_deg - rahu.longitude_deg);
        assert!((diff - 180.0).abs() < 1e-12);
        assert!(rahu.retrograde);
        assert!(ketu.retrograde);
    }

    #[test]
    fn retrograde_from_negative_speed() {
        let eph = StubEphemeris;
        let buddh = position_of(&eph, Graha::Buddh, 0.0).unwrap();
        assert!(buddh.retrograde);
        let shukra = position_of(&eph, Graha::Shukra, 0.0).unwrap();
        assert!(!shukra.retrograde);
    }

    #[test]
    fn moon_220_in_vrischika() {
        let eph = StubEphemeris;
        let moon = position_of(&eph, Graha::Chandra, 0.0).unwrap();
        assert_eq!(moon.rashi, Rashi::Vrischika);
        assert_eq!(moon.rashi.index(), 7);
        // 220 / 13.333 = 16.5 → Anuradha (index 16)
        assert_eq!(moon.nakshatra, Nakshatra::Anuradha);
    }

    #[test]
    fn dignity_constants_exact() {
        // Exalted, direct, not own: 50 + 30 = 80
        assert_eq!(dignity_strength(Graha::Surya, Rashi::Mesha, false), 80);
        // Debilitated, direct: 50 - 25 = 25
        assert_eq!(dignity_strength(Graha::Surya, Rashi::Tula, false), 25);
        // Own sign, direct: 50 + 20 = 70
        assert_eq!(dignity_strength(Graha::Surya, Rashi::Simha, false), 70);
        // Neutral sign, retrograde: 50 - 10 = 40
        assert_eq!(dignity_strength(Graha::Mangal, Rashi::Mithuna, true), 40);
        // Exalted AND own is impossible (disjoint tables), but exalted
        // retrograde: 50 + 30 - 10 = 70
        assert_eq!(dignity_strength(Graha::Guru, Rashi::Karka, true), 70);
        // Nodes ignore the retrograde penalty: Rahu exalted = 80
        assert_eq!(dignity_strength(Graha::Rahu, Rashi::Vrishabha, true), 80);
    }

    #[test]
    fn mercury_own_and_exalted_in_kanya() {
        // Buddh in Kanya is both exalted and own: 50 + 30 + 20 = 100
        assert_eq!(dignity_strength(Graha::Buddh, Rashi::Kanya, false), 100);
        // And retrograde shaves 10: 90
        assert_eq!(dignity_strength(Graha::Buddh, Rashi::Kanya, true), 90);
    }

    #[test]
    fn chart_has_nine_positions_in_order() {
        let eph = StubEphemeris;
        let chart = chart_at(&eph, 2_451_545.0, crate::geo::DEFAULT_LOCATION).unwrap();
        for graha in ALL_GRAHAS {
            assert_eq!(chart.position(graha).graha, graha);
            let lon = chart.position(graha).longitude_deg;
            assert!((0.0..360.0).contains(&lon));
        }
    }

    #[test]
    fn display_renders_dms_in_rashi() {
        let eph = StubEphemeris;
        // Moon at 220.0: 10° into Vrischika, direct.
        let moon = position_of(&eph, Graha::Chandra, 0.0).unwrap();
        assert_eq!(
            moon.to_string(),
            "Chandra 10\u{00b0}00\u{2032}00\u{2033} Vrischika"
        );
        // Mercury runs backwards in the stub.
        let buddh = position_of(&eph, Graha::Buddh, 0.0).unwrap();
        assert!(buddh.to_string().ends_with("(R)"));
    }

    #[test]
    fn house_counting() {
        assert_eq!(house_from(Rashi::Mesha, Rashi::Mesha), 1);
        assert_eq!(house_from(Rashi::Mesha, Rashi::Tula), 7);
        assert_eq!(house_from(Rashi::Makara, Rashi::Mesha), 4);
    }
}
