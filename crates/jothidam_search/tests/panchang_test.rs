//! End-to-end panchangam computation against a fixed mock provider.

use jothidam_base::{
    Body, EclipticState, Ephemeris, EphemerisError, GeoPosition, Nakshatra, RiseEvent,
};
use jothidam_search::{Paksha, Vaara, WindowKind, calculate};
use jothidam_time::DEFAULT_ZONE;

/// Provider pinning the Sun and Moon to fixed tropical longitudes and
/// a 24 deg ayanamsha, with clean 06:00/18:00 local horizon events.
struct FixedEph;

impl Ephemeris for FixedEph {
    fn tropical_position(&self, body: Body, _jd: f64) -> Result<EclipticState, EphemerisError> {
        let longitude_deg = match body {
            Body::Sun => 124.0,
            Body::Moon => 244.0,
            _ => 0.0,
        };
        Ok(EclipticState {
            longitude_deg,
            latitude_deg: 0.0,
            speed_deg_per_day: 1.0,
        })
    }

    fn ayanamsha_deg(&self, _jd: f64) -> f64 {
        24.0
    }

    fn rise_transit(
        &self,
        seed_jd: f64,
        event: RiseEvent,
        _geo: &GeoPosition,
    ) -> Result<Option<f64>, EphemerisError> {
        // Seeded at local noon; six hours either side.
        Ok(Some(match event {
            RiseEvent::Sunrise => seed_jd - 0.25,
            RiseEvent::Sunset => seed_jd + 0.25,
        }))
    }
}

/// Provider whose horizon search always fails.
struct NoHorizonEph;

impl Ephemeris for NoHorizonEph {
    fn tropical_position(&self, body: Body, jd: f64) -> Result<EclipticState, EphemerisError> {
        FixedEph.tropical_position(body, jd)
    }

    fn ayanamsha_deg(&self, jd: f64) -> f64 {
        FixedEph.ayanamsha_deg(jd)
    }

    fn rise_transit(
        &self,
        _seed_jd: f64,
        _event: RiseEvent,
        _geo: &GeoPosition,
    ) -> Result<Option<f64>, EphemerisError> {
        Err(EphemerisError::NoConvergence("horizon search"))
    }
}

fn chennai() -> GeoPosition {
    jothidam_base::DEFAULT_LOCATION
}

#[test]
fn limbs_from_fixed_longitudes() {
    // Sidereal Sun 100, Moon 220: elongation 120, sum 320.
    let day = calculate(&FixedEph, 2023, 3, 2, &chennai(), DEFAULT_ZONE).unwrap();

    assert_eq!(day.tithi.index, 10);
    assert_eq!(day.tithi.name, "Ekadashi");
    assert_eq!(day.tithi.paksha, Paksha::Shukla);

    assert_eq!(day.nakshatra.nakshatra, Nakshatra::Anuradha);
    assert_eq!(day.nakshatra.index, 16);
    assert_eq!(day.nakshatra.pada, 3);

    assert_eq!(day.yoga.index, 24);
    assert_eq!(day.yoga.name, "Brahma");

    assert_eq!(day.karana.index, 20);
    assert_eq!(day.karana.name, "Vanija");
}

#[test]
fn weekday_and_clock_fields() {
    // 2023-03-02 was a Thursday.
    let day = calculate(&FixedEph, 2023, 3, 2, &chennai(), DEFAULT_ZONE).unwrap();
    assert_eq!(day.vaara, Vaara::Guru);
    assert_eq!(day.sunrise_hm, (6, 0));
    assert_eq!(day.sunset_hm, (18, 0));
    assert!(!day.approximate_sun_events);
    assert!((day.utc_offset_hours - 5.5).abs() < 1e-9);
}

#[test]
fn thursday_windows() {
    let day = calculate(&FixedEph, 2023, 3, 2, &chennai(), DEFAULT_ZONE).unwrap();
    // Thursday: Rahu Kalam is the sixth daylight eighth, 13:30-15:00.
    let rahu = day.windows_of(WindowKind::RahuKalam).next().unwrap();
    assert_eq!(rahu.start_hm, (13, 30));
    assert_eq!(rahu.end_hm, (15, 0));
    let yama = day.windows_of(WindowKind::Yamagandam).next().unwrap();
    assert_eq!(yama.start_hm, (6, 0));
    assert_eq!(yama.end_hm, (7, 30));

    // The three avoidance windows never overlap each other.
    let avoid: Vec<_> = day.windows.iter().filter(|w| w.kind.inauspicious()).collect();
    for (i, a) in avoid.iter().enumerate() {
        for b in &avoid[i + 1..] {
            assert!(!a.overlaps(b.start_jd, b.end_jd));
        }
    }
}

#[test]
fn strong_day_scores_full_marks() {
    // Ekadashi + Anuradha + Brahma + Thursday: every factor at max.
    let day = calculate(&FixedEph, 2023, 3, 2, &chennai(), DEFAULT_ZONE).unwrap();
    assert_eq!(day.score, 100);
    let sum: f64 = day.breakdown.iter().map(|f| f.points).sum();
    assert_eq!(sum.round() as u8, day.score);
}

#[test]
fn horizon_failure_degrades_to_approximate_window() {
    let day = calculate(&NoHorizonEph, 2023, 3, 2, &chennai(), DEFAULT_ZONE).unwrap();
    assert!(day.approximate_sun_events);
    assert_eq!(day.sunrise_hm, (6, 0));
    assert_eq!(day.sunset_hm, (18, 0));
    // Windows still partition the approximate daylight span.
    assert_eq!(day.windows.iter().filter(|w| w.kind.inauspicious()).count(), 3);
}
