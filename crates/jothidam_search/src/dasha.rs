//! Vimshottari dasha: the 120-year cycle of nine planetary periods keyed
//! to the Moon's natal nakshatra.
//!
//! The opening period belongs to the natal star's lord and is shortened
//! by the fraction of the star the Moon has already traversed at birth.
//! Periods then follow the fixed lord order, and the timeline is cut at
//! exactly 120 years after birth, so the final period is truncated.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use jothidam_base::{Graha, nakshatra_from_longitude};

use crate::error::SearchError;

/// Lords of the cycle, in period order starting from Ashwini's lord.
pub const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Full-period lengths in years, aligned with [`VIMSHOTTARI_LORDS`].
/// They sum to 120.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Dasha arithmetic uses the Julian year throughout.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Total cycle length in days.
pub const CYCLE_DAYS: f64 = 120.0 * DAYS_PER_YEAR;

/// One dasha period at any level (maha or antar).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    /// JD UT, inclusive.
    pub start_jd: f64,
    /// JD UT, exclusive.
    pub end_jd: f64,
}

impl DashaPeriod {
    /// Period length in days.
    pub fn span_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Period length in Julian years.
    pub fn span_years(&self) -> f64 {
        self.span_days() / DAYS_PER_YEAR
    }

    /// Start-inclusive, end-exclusive containment.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

impl Display for DashaPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} dasha ({:.2} years)", self.lord.name(), self.span_years())
    }
}

/// Index into the lord cycle for a natal nakshatra index (0-26).
const fn lord_cycle_index(nakshatra_index: u8) -> usize {
    (nakshatra_index % 9) as usize
}

/// Build the mahadasha timeline from the Moon's sidereal longitude at
/// birth. The timeline covers exactly 120 years from `birth_jd`; the
/// opening period carries only the unexpired balance of the natal star.
pub fn mahadashas(moon_sidereal_deg: f64, birth_jd: f64) -> Vec<DashaPeriod> {
    let natal = nakshatra_from_longitude(moon_sidereal_deg);
    let first = lord_cycle_index(natal.index);
    let horizon = birth_jd + CYCLE_DAYS;

    let mut periods = Vec::with_capacity(10);
    let mut start = birth_jd;
    let mut cycle = first;
    // Balance of the first period: the unexpired fraction of the star.
    let mut fraction = 1.0 - natal.elapsed_fraction;
    while start < horizon {
        let full_days = VIMSHOTTARI_YEARS[cycle] * DAYS_PER_YEAR;
        let end = (start + fraction * full_days).min(horizon);
        periods.push(DashaPeriod {
            lord: VIMSHOTTARI_LORDS[cycle],
            start_jd: start,
            end_jd: end,
        });
        start = end;
        cycle = (cycle + 1) % 9;
        fraction = 1.0;
    }
    periods
}

/// Subdivide a period into its nine antardashas.
///
/// Sub-periods are proportional to the full-cycle years of their lords
/// and begin with the parent's own lord. The final end is snapped to the
/// parent's end so rounding never leaves a gap.
pub fn antardashas(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let parent_days = parent.span_days();
    let first = VIMSHOTTARI_LORDS
        .iter()
        .position(|&g| g == parent.lord)
        .unwrap_or(0);

    let mut subs = Vec::with_capacity(9);
    let mut start = parent.start_jd;
    for i in 0..9 {
        let cycle = (first + i) % 9;
        let end = if i == 8 {
            parent.end_jd
        } else {
            start + parent_days * VIMSHOTTARI_YEARS[cycle] / 120.0
        };
        subs.push(DashaPeriod {
            lord: VIMSHOTTARI_LORDS[cycle],
            start_jd: start,
            end_jd: end,
        });
        start = end;
    }
    subs
}

/// The period containing `jd`, or `NoPeriod` outside the timeline.
pub fn active_period(periods: &[DashaPeriod], jd: f64) -> Result<&DashaPeriod, SearchError> {
    periods
        .iter()
        .find(|p| p.contains(jd))
        .ok_or(SearchError::NoPeriod("instant outside the 120-year cycle"))
}

/// The (mahadasha, antardasha) pair active at `jd`.
pub fn active_antardasha(
    periods: &[DashaPeriod],
    jd: f64,
) -> Result<(DashaPeriod, DashaPeriod), SearchError> {
    let maha = *active_period(periods, jd)?;
    let subs = antardashas(&maha);
    let antar = *subs
        .iter()
        .find(|p| p.contains(jd))
        .ok_or(SearchError::NoPeriod("instant outside the 120-year cycle"))?;
    Ok((maha, antar))
}
