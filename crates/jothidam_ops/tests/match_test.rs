//! Chart-level matching and forecast flows against a stub provider.

use jothidam_base::{
    Body, DEFAULT_LOCATION, EclipticState, Ephemeris, EphemerisError, GeoPosition, Graha, Rashi,
    RiseEvent, chart_at,
};
use jothidam_ops::{
    ForecastSpan, MatchMode, OpsError, forecast_with_dasha, has_chevvai_dosha, match_charts,
};
use jothidam_search::mahadashas;

struct StubEphemeris;

impl Ephemeris for StubEphemeris {
    fn tropical_position(&self, body: Body, _jd: f64) -> Result<EclipticState, EphemerisError> {
        let (lon, speed) = match body {
            Body::Sun => (100.0, 0.9856),
            Body::Moon => (220.0, 13.18),
            Body::Mercury => (95.0, 1.2),
            Body::Venus => (130.0, 1.2),
            // Mars at 280 deg sits in Makara.
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
fn chevvai_dosha_follows_mars_house() {
    let mut chart = chart_at(&StubEphemeris, 2_448_000.0, DEFAULT_LOCATION).unwrap();
    // Mars in Makara: 10th from a Mesha lagna, clean.
    chart.lagna = Rashi::Mesha;
    assert!(!has_chevvai_dosha(&chart));
    // 8th from a Mithuna lagna, afflicted.
    chart.lagna = Rashi::Mithuna;
    assert!(has_chevvai_dosha(&chart));
    // 7th from a Karka lagna, afflicted.
    chart.lagna = Rashi::Karka;
    assert!(has_chevvai_dosha(&chart));
}

#[test]
fn mutual_dosha_cancels() {
    let mut bride = chart_at(&StubEphemeris, 2_448_000.0, DEFAULT_LOCATION).unwrap();
    let mut groom = chart_at(&StubEphemeris, 2_449_000.0, DEFAULT_LOCATION).unwrap();
    bride.lagna = Rashi::Mithuna;
    groom.lagna = Rashi::Karka;

    let report = match_charts(&bride, &groom, MatchMode::Ten);
    let chevvai = report.chevvai.unwrap();
    assert!(chevvai.bride_afflicted);
    assert!(chevvai.groom_afflicted);
    assert!(chevvai.cancelled);

    groom.lagna = Rashi::Mesha;
    let report = match_charts(&bride, &groom, MatchMode::Ten);
    let chevvai = report.chevvai.unwrap();
    assert!(chevvai.bride_afflicted);
    assert!(!chevvai.groom_afflicted);
    assert!(!chevvai.cancelled);
}

#[test]
fn chart_match_reports_all_factors() {
    let bride = chart_at(&StubEphemeris, 2_448_000.0, DEFAULT_LOCATION).unwrap();
    let groom = chart_at(&StubEphemeris, 2_449_000.0, DEFAULT_LOCATION).unwrap();
    let report = match_charts(&bride, &groom, MatchMode::Fourteen);
    assert_eq!(report.factors.len(), 14);
    assert!(report.chevvai.is_some());
    assert!(report.score <= 100);
}

#[test]
fn forecast_resolves_the_running_dasha() {
    let birth_jd = 2_448_000.0;
    let natal = chart_at(&StubEphemeris, birth_jd, DEFAULT_LOCATION).unwrap();
    let periods = mahadashas(natal.moon_longitude(), birth_jd);

    let transit = chart_at(&StubEphemeris, birth_jd + 10_000.0, DEFAULT_LOCATION).unwrap();
    let forecasts =
        forecast_with_dasha(&natal, &transit, &periods, ForecastSpan::Week, (2026, 8, 30)).unwrap();
    assert_eq!(forecasts.len(), 5);
    for f in &forecasts {
        assert!((35..=95).contains(&f.score));
    }
}

#[test]
fn forecast_outside_the_cycle_errors() {
    let birth_jd = 2_448_000.0;
    let natal = chart_at(&StubEphemeris, birth_jd, DEFAULT_LOCATION).unwrap();
    let periods = mahadashas(natal.moon_longitude(), birth_jd);

    let late = chart_at(&StubEphemeris, birth_jd + 200.0 * 365.25, DEFAULT_LOCATION).unwrap();
    let err = forecast_with_dasha(&natal, &late, &periods, ForecastSpan::Day, (2190, 1, 1))
        .unwrap_err();
    assert!(matches!(err, OpsError::Search(_)));
}
