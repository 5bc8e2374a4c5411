//! Life-area forecast scoring from a natal chart, the running transits,
//! and the active dasha lord.
//!
//! The score is a weighted blend of four chart signals plus a small
//! deterministic daily variation, clamped to [35, 95]. Every contribution
//! is reported in the trace, including the clamp adjustment, so the trace
//! always sums to the final score.

use serde::Serialize;

use jothidam_base::{Chart, Graha, Rashi, house_from};
use jothidam_search::{DashaPeriod, active_period};

use crate::error::OpsError;

/// Base score before any chart signal is applied.
const BASE_SCORE: f64 = 50.0;

/// Final scores never leave this band.
const SCORE_FLOOR: f64 = 35.0;
const SCORE_CEILING: f64 = 95.0;

/// Component weights.
const KARAKA_WEIGHT: f64 = 0.40;
const HOUSE_LORD_WEIGHT: f64 = 0.30;
const DASHA_WEIGHT: f64 = 0.15;
const TRANSIT_WEIGHT: f64 = 0.15;

/// Houses counted as supportive placements.
const GOOD_HOUSES: [u8; 7] = [1, 4, 5, 7, 9, 10, 11];
/// Dusthana houses.
const BAD_HOUSES: [u8; 3] = [6, 8, 12];

/// The five areas the forecast covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifeArea {
    Love,
    Career,
    Education,
    Family,
    Health,
}

/// All areas in report order.
pub const ALL_LIFE_AREAS: [LifeArea; 5] = [
    LifeArea::Love,
    LifeArea::Career,
    LifeArea::Education,
    LifeArea::Family,
    LifeArea::Health,
];

impl LifeArea {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Love => "Love",
            Self::Career => "Career",
            Self::Education => "Education",
            Self::Family => "Family",
            Self::Health => "Health",
        }
    }

    const fn index(self) -> u64 {
        match self {
            Self::Love => 0,
            Self::Career => 1,
            Self::Education => 2,
            Self::Family => 3,
            Self::Health => 4,
        }
    }

    /// Significator grahas for the area.
    pub const fn karakas(self) -> &'static [Graha] {
        match self {
            Self::Love => &[Graha::Shukra, Graha::Chandra],
            Self::Career => &[Graha::Surya, Graha::Shani, Graha::Buddh],
            Self::Education => &[Graha::Buddh, Graha::Guru],
            Self::Family => &[Graha::Chandra, Graha::Guru],
            Self::Health => &[Graha::Surya, Graha::Mangal],
        }
    }

    /// Houses whose lords weigh on the area.
    pub const fn houses(self) -> &'static [u8] {
        match self {
            Self::Love => &[7],
            Self::Career => &[10],
            Self::Education => &[4, 5],
            Self::Family => &[2, 4],
            Self::Health => &[1, 6],
        }
    }
}

/// How far ahead the forecast looks; widens the variation seed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ForecastSpan {
    Day,
    Week,
    Month,
    Year,
}

impl ForecastSpan {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }
}

/// One traced contribution to the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastFactor {
    pub label: String,
    pub points: f64,
}

/// Forecast for one area over one span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaForecast {
    pub area: LifeArea,
    pub span: ForecastSpan,
    /// 35-95.
    pub score: u8,
    /// Contributions summing exactly to `score`.
    pub trace: Vec<ForecastFactor>,
}

fn house_quality(house: u8) -> f64 {
    if GOOD_HOUSES.contains(&house) {
        8.0
    } else if BAD_HOUSES.contains(&house) {
        -10.0
    } else {
        0.0
    }
}

/// Average karaka dignity strength, centred on 50.
fn karaka_signal(natal: &Chart, area: LifeArea) -> f64 {
    let karakas = area.karakas();
    let sum: f64 = karakas
        .iter()
        .map(|&k| natal.position(k).strength as f64 - 50.0)
        .sum();
    sum / karakas.len() as f64
}

/// Placement of the lords of the area's houses.
fn house_lord_signal(natal: &Chart, area: LifeArea) -> f64 {
    area.houses()
        .iter()
        .map(|&h| {
            let sign_in_house = natal.lagna.nth_from(h);
            let lord = sign_in_house.lord();
            house_quality(natal.house_of(lord))
        })
        .sum()
}

/// Transit karakas counted from the natal Moon.
fn transit_signal(natal: &Chart, transit: &Chart, area: LifeArea) -> f64 {
    let moon_rashi: Rashi = natal.moon_rashi();
    area.karakas()
        .iter()
        .map(|&k| {
            let house = house_from(moon_rashi, transit.position(k).rashi);
            if GOOD_HOUSES.contains(&house) {
                5.0
            } else if BAD_HOUSES.contains(&house) {
                -5.0
            } else {
                0.0
            }
        })
        .sum()
}

/// Rough day-of-year, adequate for seeding.
fn day_of_year(month: u32, day: u32) -> u32 {
    const CUMULATIVE: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
    CUMULATIVE[(month as usize - 1).min(11)] + day
}

/// Deterministic variation in [-3, +3], stable for the same area, span
/// window, and date.
fn day_variation(area: LifeArea, span: ForecastSpan, date: (i32, u32, u32)) -> f64 {
    let (year, month, day) = date;
    let window = match span {
        ForecastSpan::Day => day_of_year(month, day) as u64,
        ForecastSpan::Week => (day_of_year(month, day) / 7) as u64,
        ForecastSpan::Month => month as u64,
        ForecastSpan::Year => 0,
    };
    let seed = (year as u64)
        .wrapping_mul(53)
        .wrapping_add(window.wrapping_mul(17))
        .wrapping_add(area.index().wrapping_mul(7));
    let mixed = seed.wrapping_mul(2_654_435_761).rotate_left(13);
    ((mixed % 7) as f64) - 3.0
}

/// Score one life area.
pub fn forecast_area(
    natal: &Chart,
    transit: &Chart,
    dasha_lord: Graha,
    area: LifeArea,
    span: ForecastSpan,
    date: (i32, u32, u32),
) -> AreaForecast {
    let karaka = karaka_signal(natal, area) * KARAKA_WEIGHT;
    let lords = house_lord_signal(natal, area) * HOUSE_LORD_WEIGHT;
    let dasha = if area.karakas().contains(&dasha_lord) {
        20.0 * DASHA_WEIGHT
    } else {
        0.0
    };
    let transit_pts = transit_signal(natal, transit, area) * TRANSIT_WEIGHT;
    let variation = day_variation(area, span, date);

    let mut trace = vec![
        ForecastFactor {
            label: "baseline".to_string(),
            points: BASE_SCORE,
        },
        ForecastFactor {
            label: format!("{} karaka strength", area.name()),
            points: karaka,
        },
        ForecastFactor {
            label: "house lord placement".to_string(),
            points: lords,
        },
        ForecastFactor {
            label: format!("dasha lord {}", dasha_lord.name()),
            points: dasha,
        },
        ForecastFactor {
            label: "transits from the natal Moon".to_string(),
            points: transit_pts,
        },
        ForecastFactor {
            label: format!("{} variation", span.name()),
            points: variation,
        },
    ];

    let raw = BASE_SCORE + karaka + lords + dasha + transit_pts + variation;
    let clamped = raw.clamp(SCORE_FLOOR, SCORE_CEILING);
    if (clamped - raw).abs() > f64::EPSILON {
        trace.push(ForecastFactor {
            label: "band adjustment".to_string(),
            points: clamped - raw,
        });
    }
    let score = clamped.round() as u8;
    // Absorb the rounding remainder so the trace sums to the integer.
    let traced: f64 = trace.iter().map(|f| f.points).sum();
    let remainder = score as f64 - traced;
    if remainder.abs() > f64::EPSILON {
        trace.push(ForecastFactor {
            label: "rounding".to_string(),
            points: remainder,
        });
    }

    AreaForecast {
        area,
        span,
        score,
        trace,
    }
}

/// Score every life area for one span.
pub fn forecast_all(
    natal: &Chart,
    transit: &Chart,
    dasha_lord: Graha,
    span: ForecastSpan,
    date: (i32, u32, u32),
) -> Vec<AreaForecast> {
    ALL_LIFE_AREAS
        .iter()
        .map(|&area| forecast_area(natal, transit, dasha_lord, area, span, date))
        .collect()
}

/// Convenience wrapper that resolves the active dasha lord from a
/// mahadasha timeline before scoring.
pub fn forecast_with_dasha(
    natal: &Chart,
    transit: &Chart,
    periods: &[DashaPeriod],
    span: ForecastSpan,
    date: (i32, u32, u32),
) -> Result<Vec<AreaForecast>, OpsError> {
    let lord = active_period(periods, transit.jd)?.lord;
    Ok(forecast_all(natal, transit, lord, span, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jothidam_base::{
        Body, DEFAULT_LOCATION, EclipticState, Ephemeris, EphemerisError, GeoPosition, RiseEvent,
        chart_at,
    };

    struct StubEphemeris {
        shift: f64,
    }

    impl Ephemeris for StubEphemeris {
        fn tropical_position(&self, body: Body, _jd: f64) -> Result<EclipticState, EphemerisError> {
            let (lon, speed) = match body {
                Body::Sun => (100.0, 0.9856),
                Body::Moon => (220.0, 13.18),
                Body::Mercury => (95.0, 1.2),
                Body::Venus => (130.0, 1.2),
                Body::Mars => (280.0, 0.5),
                Body::Jupiter => (95.0, 0.08),
                Body::Saturn => (185.0, 0.03),
                Body::MeanNode => (35.0, -0.0529),
            };
            Ok(EclipticState {
                longitude_deg: lon + self.shift,
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

    fn charts() -> (Chart, Chart) {
        let natal = chart_at(&StubEphemeris { shift: 0.0 }, 2_448_000.0, DEFAULT_LOCATION).unwrap();
        let transit =
            chart_at(&StubEphemeris { shift: 40.0 }, 2_460_000.0, DEFAULT_LOCATION).unwrap();
        (natal, transit)
    }

    #[test]
    fn scores_stay_in_band() {
        let (natal, transit) = charts();
        for span in [
            ForecastSpan::Day,
            ForecastSpan::Week,
            ForecastSpan::Month,
            ForecastSpan::Year,
        ] {
            for f in forecast_all(&natal, &transit, Graha::Shukra, span, (2026, 8, 30)) {
                assert!((35..=95).contains(&f.score), "{} {}", f.area.name(), f.score);
            }
        }
    }

    #[test]
    fn trace_sums_to_score() {
        let (natal, transit) = charts();
        for f in forecast_all(&natal, &transit, Graha::Guru, ForecastSpan::Day, (2026, 8, 30)) {
            let sum: f64 = f.trace.iter().map(|t| t.points).sum();
            assert!((sum - f.score as f64).abs() < 1e-9, "{}", f.area.name());
        }
    }

    #[test]
    fn forecast_is_deterministic() {
        let (natal, transit) = charts();
        let a = forecast_area(
            &natal,
            &transit,
            Graha::Shukra,
            LifeArea::Love,
            ForecastSpan::Day,
            (2026, 8, 30),
        );
        let b = forecast_area(
            &natal,
            &transit,
            Graha::Shukra,
            LifeArea::Love,
            ForecastSpan::Day,
            (2026, 8, 30),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn dasha_lord_as_karaka_lifts_the_area() {
        let (natal, transit) = charts();
        // Shukra is a Love karaka; Shani is not.
        let with = forecast_area(
            &natal,
            &transit,
            Graha::Shukra,
            LifeArea::Love,
            ForecastSpan::Year,
            (2026, 8, 30),
        );
        let without = forecast_area(
            &natal,
            &transit,
            Graha::Shani,
            LifeArea::Love,
            ForecastSpan::Year,
            (2026, 8, 30),
        );
        let dasha_points = |f: &AreaForecast| {
            f.trace
                .iter()
                .find(|t| t.label.starts_with("dasha lord"))
                .map(|t| t.points)
                .unwrap_or(0.0)
        };
        assert_eq!(dasha_points(&with), 3.0);
        assert_eq!(dasha_points(&without), 0.0);
    }

    #[test]
    fn variation_depends_on_span_window() {
        // Two dates in the same month agree for Month span.
        let m1 = day_variation(LifeArea::Career, ForecastSpan::Month, (2026, 8, 3));
        let m2 = day_variation(LifeArea::Career, ForecastSpan::Month, (2026, 8, 29));
        assert_eq!(m1, m2);
        // And the year span ignores the month entirely.
        let y1 = day_variation(LifeArea::Career, ForecastSpan::Year, (2026, 1, 1));
        let y2 = day_variation(LifeArea::Career, ForecastSpan::Year, (2026, 12, 31));
        assert_eq!(y1, y2);
        assert!((-3.0..=3.0).contains(&m1));
    }

    #[test]
    fn all_areas_reported_in_order() {
        let (natal, transit) = charts();
        let all = forecast_all(&natal, &transit, Graha::Guru, ForecastSpan::Week, (2026, 8, 30));
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].area, LifeArea::Love);
        assert_eq!(all[4].area, LifeArea::Health);
    }
}
