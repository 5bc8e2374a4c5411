//! Porutham: marriage compatibility scoring over the factor tables.
//!
//! The ten-factor Tamil mode scores Dina, Gana, Mahendra, Stree Deergha,
//! Yoni, Rasi, Rasi Adhipathi, Vasya, Rajju, and Vedha. The fourteen-
//! factor mode adds Nadi, Varna, Tara, and Graha Maitri. Each factor
//! earns a share of its fixed maximum; the overall score is the earned
//! fraction of the mode's total, 0-100.

use serde::Serialize;

use jothidam_base::{Chart, Graha, Nakshatra, Rashi, Relation, house_from};

use crate::error::OpsError;
use crate::porutham_data::{
    gana_of, nadi_of, rajju_of, varna_rank, vasya_of, vedha_afflicted, yoni_friendly,
    yoni_hostile, yoni_of,
};

/// Which factor set to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchMode {
    /// The ten Tamil poruthams.
    Ten,
    /// Ten plus Nadi, Varna, Tara, and Graha Maitri.
    Fourteen,
}

/// Verdict tier for a factor or the overall match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    Excellent,
    Good,
    Average,
    Poor,
}

impl MatchStatus {
    /// Tier for a 0-100 score.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::Excellent
        } else if score >= 70.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Average
        } else {
            Self::Poor
        }
    }
}

/// One scored factor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorResult {
    pub name: &'static str,
    pub earned: f64,
    pub max: f64,
    /// earned/max as 0-100.
    pub score: f64,
    pub status: MatchStatus,
    pub description: String,
}

impl FactorResult {
    fn new(name: &'static str, earned: f64, max: f64, description: String) -> Self {
        let score = earned / max * 100.0;
        Self {
            name,
            earned,
            max,
            score,
            status: MatchStatus::from_score(score),
            description,
        }
    }
}

/// Chevvai (Mars) dosha assessment for a pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChevvaiDosha {
    pub bride_afflicted: bool,
    pub groom_afflicted: bool,
    /// Both afflicted: the doshas cancel each other.
    pub cancelled: bool,
}

/// Full match report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoruthamReport {
    pub mode: MatchMode,
    pub factors: Vec<FactorResult>,
    pub earned: f64,
    pub max: f64,
    /// Overall compatibility, 0-100.
    pub score: u8,
    pub status: MatchStatus,
    /// Present only when both charts were supplied.
    pub chevvai: Option<ChevvaiDosha>,
}

/// Birth factors of one partner: janma nakshatra and janma rasi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Partner {
    pub star: Nakshatra,
    pub rasi: Rashi,
}

impl Partner {
    pub const fn new(star: Nakshatra, rasi: Rashi) -> Self {
        Self { star, rasi }
    }

    /// Extract the janma factors from a birth chart.
    pub fn from_chart(chart: &Chart) -> Self {
        Self {
            star: chart.moon_nakshatra(),
            rasi: chart.moon_rashi(),
        }
    }

    /// Parse from name strings ("Rohini", "Rishabam" / "Vrishabha" /
    /// "Taurus").
    pub fn from_names(star: &str, rasi: &str) -> Result<Self, OpsError> {
        Ok(Self {
            star: Nakshatra::from_name(star)?,
            rasi: Rashi::from_name(rasi)?,
        })
    }
}

/// Remainders of the 9-step tara count that mark hostile days
/// (vipat 3, pratyak 5, naidhana 7).
fn count_unfavourable(rem: u8) -> bool {
    matches!(rem, 3 | 5 | 7)
}

fn dina(bride: &Partner, groom: &Partner) -> FactorResult {
    let count = bride.star.count_to(groom.star);
    let ok = !count_unfavourable(count % 9);
    FactorResult::new(
        "Dina",
        if ok { 3.0 } else { 0.0 },
        3.0,
        format!("count {count} from {} to {}", bride.star.name(), groom.star.name()),
    )
}

fn gana(bride: &Partner, groom: &Partner) -> FactorResult {
    use crate::porutham_data::Gana::*;
    let b = gana_of(bride.star);
    let g = gana_of(groom.star);
    let earned = match (b, g) {
        _ if b == g => 5.0,
        (Deva, Manushya) | (Manushya, Deva) => 3.0,
        _ => 0.0,
    };
    FactorResult::new("Gana", earned, 5.0, format!("{b:?} with {g:?}"))
}

fn mahendra(bride: &Partner, groom: &Partner) -> FactorResult {
    let count = bride.star.count_to(groom.star);
    let ok = matches!(count, 4 | 7 | 10 | 13 | 16 | 19 | 22 | 25);
    FactorResult::new(
        "Mahendra",
        if ok { 2.0 } else { 0.0 },
        2.0,
        format!("count {count} from the bride's star"),
    )
}

fn stree_deergha(bride: &Partner, groom: &Partner) -> FactorResult {
    let count = bride.star.count_to(groom.star);
    let earned = if count > 13 {
        2.0
    } else if count > 7 {
        1.0
    } else {
        0.0
    };
    FactorResult::new(
        "Stree Deergha",
        earned,
        2.0,
        format!("count {count} from the bride's star"),
    )
}

fn yoni(bride: &Partner, groom: &Partner) -> FactorResult {
    let b = yoni_of(bride.star);
    let g = yoni_of(groom.star);
    // Same or friendly animal grades uthamam; enemies fail outright.
    let earned = if b == g || yoni_friendly(b, g) {
        4.0
    } else if yoni_hostile(b, g) {
        0.0
    } else {
        2.0
    };
    FactorResult::new("Yoni", earned, 4.0, format!("{b:?} with {g:?}"))
}

fn rasi(bride: &Partner, groom: &Partner) -> FactorResult {
    let house = house_from(bride.rasi, groom.rasi);
    let earned = match house {
        1 | 3 | 4 | 7 | 10 | 11 => 7.0,
        5 | 9 => 4.0,
        _ => 0.0, // 2/12 and 6/8 placements
    };
    FactorResult::new(
        "Rasi",
        earned,
        7.0,
        format!("{} is {house} from {}", groom.rasi.name(), bride.rasi.name()),
    )
}

fn rasi_adhipathi(bride: &Partner, groom: &Partner) -> FactorResult {
    let b = bride.rasi.lord();
    let g = groom.rasi.lord();
    let forward = b.relation_to(g);
    let backward = g.relation_to(b);
    let earned = if forward == Relation::Enemy || backward == Relation::Enemy {
        0.0
    } else if forward == Relation::Friend && backward == Relation::Friend {
        5.0
    } else {
        3.0
    };
    FactorResult::new(
        "Rasi Adhipathi",
        earned,
        5.0,
        format!("{} and {}", b.name(), g.name()),
    )
}

fn vasya(bride: &Partner, groom: &Partner) -> FactorResult {
    let forward = vasya_of(bride.rasi).contains(&groom.rasi);
    let backward = vasya_of(groom.rasi).contains(&bride.rasi);
    let earned = match (forward, backward) {
        (true, true) => 2.0,
        (true, false) | (false, true) => 1.0,
        (false, false) => 0.0,
    };
    FactorResult::new(
        "Vasya",
        earned,
        2.0,
        format!("{} with {}", bride.rasi.name(), groom.rasi.name()),
    )
}

fn rajju(bride: &Partner, groom: &Partner) -> FactorResult {
    let b = rajju_of(bride.star);
    let g = rajju_of(groom.star);
    let ok = b != g;
    FactorResult::new(
        "Rajju",
        if ok { 5.0 } else { 0.0 },
        5.0,
        format!("{b:?} with {g:?}"),
    )
}

fn vedha(bride: &Partner, groom: &Partner) -> FactorResult {
    let afflicted = vedha_afflicted(bride.star, groom.star);
    FactorResult::new(
        "Vedha",
        if afflicted { 0.0 } else { 2.0 },
        2.0,
        format!("{} with {}", bride.star.name(), groom.star.name()),
    )
}

fn nadi(bride: &Partner, groom: &Partner) -> FactorResult {
    let b = nadi_of(bride.star);
    let g = nadi_of(groom.star);
    let ok = b != g;
    FactorResult::new(
        "Nadi",
        if ok { 8.0 } else { 0.0 },
        8.0,
        format!("{b:?} with {g:?}"),
    )
}

fn varna(bride: &Partner, groom: &Partner) -> FactorResult {
    let ok = varna_rank(groom.rasi) >= varna_rank(bride.rasi);
    FactorResult::new(
        "Varna",
        if ok { 1.0 } else { 0.0 },
        1.0,
        format!(
            "groom rank {} against bride rank {}",
            varna_rank(groom.rasi),
            varna_rank(bride.rasi)
        ),
    )
}

fn tara(bride: &Partner, groom: &Partner) -> FactorResult {
    let forward = !count_unfavourable(bride.star.count_to(groom.star) % 9);
    let backward = !count_unfavourable(groom.star.count_to(bride.star) % 9);
    let earned = match (forward, backward) {
        (true, true) => 3.0,
        (true, false) | (false, true) => 1.5,
        (false, false) => 0.0,
    };
    FactorResult::new("Tara", earned, 3.0, "tara counts both ways".to_string())
}

fn graha_maitri(bride: &Partner, groom: &Partner) -> FactorResult {
    use Relation::*;
    let b = bride.rasi.lord();
    let g = groom.rasi.lord();
    let earned = match (b.relation_to(g), g.relation_to(b)) {
        (Friend, Friend) => 5.0,
        (Friend, Neutral) | (Neutral, Friend) => 4.0,
        (Neutral, Neutral) => 3.0,
        (Friend, Enemy) | (Enemy, Friend) => 1.0,
        (Neutral, Enemy) | (Enemy, Neutral) => 0.5,
        (Enemy, Enemy) => 0.0,
    };
    FactorResult::new(
        "Graha Maitri",
        earned,
        5.0,
        format!("{} and {}", b.name(), g.name()),
    )
}

/// Whether a chart carries chevvai dosha: Mars in houses 2, 4, 7, 8, or
/// 12 from the lagna.
pub fn has_chevvai_dosha(chart: &Chart) -> bool {
    matches!(chart.house_of(Graha::Mangal), 2 | 4 | 7 | 8 | 12)
}

fn chevvai(bride: &Chart, groom: &Chart) -> ChevvaiDosha {
    let b = has_chevvai_dosha(bride);
    let g = has_chevvai_dosha(groom);
    ChevvaiDosha {
        bride_afflicted: b,
        groom_afflicted: g,
        cancelled: b && g,
    }
}

fn factor_list(bride: &Partner, groom: &Partner, mode: MatchMode) -> Vec<FactorResult> {
    let mut factors = vec![
        dina(bride, groom),
        gana(bride, groom),
        mahendra(bride, groom),
        stree_deergha(bride, groom),
        yoni(bride, groom),
        rasi(bride, groom),
        rasi_adhipathi(bride, groom),
        vasya(bride, groom),
        rajju(bride, groom),
        vedha(bride, groom),
    ];
    if mode == MatchMode::Fourteen {
        factors.push(nadi(bride, groom));
        factors.push(varna(bride, groom));
        factors.push(tara(bride, groom));
        factors.push(graha_maitri(bride, groom));
    }
    factors
}

fn report(factors: Vec<FactorResult>, mode: MatchMode, chevvai: Option<ChevvaiDosha>) -> PoruthamReport {
    let earned: f64 = factors.iter().map(|f| f.earned).sum();
    let max: f64 = factors.iter().map(|f| f.max).sum();
    let score = (earned / max * 100.0).round().clamp(0.0, 100.0) as u8;
    PoruthamReport {
        mode,
        factors,
        earned,
        max,
        score,
        status: MatchStatus::from_score(score as f64),
        chevvai,
    }
}

/// Match two partners from their janma factors alone.
pub fn match_partners(bride: &Partner, groom: &Partner, mode: MatchMode) -> PoruthamReport {
    report(factor_list(bride, groom, mode), mode, None)
}

/// Match two full birth charts. Adds the chevvai dosha assessment on
/// top of the factor score.
pub fn match_charts(bride: &Chart, groom: &Chart, mode: MatchMode) -> PoruthamReport {
    let b = Partner::from_chart(bride);
    let g = Partner::from_chart(groom);
    report(factor_list(&b, &g, mode), mode, Some(chevvai(bride, groom)))
}

/// Chart-free check from star and rasi names.
pub fn quick_check(
    bride_star: &str,
    bride_rasi: &str,
    groom_star: &str,
    groom_rasi: &str,
    mode: MatchMode,
) -> Result<PoruthamReport, OpsError> {
    let bride = Partner::from_names(bride_star, bride_rasi)?;
    let groom = Partner::from_names(groom_star, groom_rasi)?;
    Ok(match_partners(&bride, &groom, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner(star: Nakshatra, rasi: Rashi) -> Partner {
        Partner::new(star, rasi)
    }

    #[test]
    fn ten_mode_has_ten_factors() {
        let b = partner(Nakshatra::Rohini, Rashi::Vrishabha);
        let g = partner(Nakshatra::Hasta, Rashi::Kanya);
        let r = match_partners(&b, &g, MatchMode::Ten);
        assert_eq!(r.factors.len(), 10);
        assert_eq!(r.max, 37.0);
    }

    #[test]
    fn fourteen_mode_adds_four() {
        let b = partner(Nakshatra::Rohini, Rashi::Vrishabha);
        let g = partner(Nakshatra::Hasta, Rashi::Kanya);
        let r = match_partners(&b, &g, MatchMode::Fourteen);
        assert_eq!(r.factors.len(), 14);
        assert_eq!(r.max, 54.0);
        let names: Vec<_> = r.factors.iter().map(|f| f.name).collect();
        for extra in ["Nadi", "Varna", "Tara", "Graha Maitri"] {
            assert!(names.contains(&extra));
        }
    }

    #[test]
    fn symmetric_factors_max_out_on_identical_partners() {
        let p = partner(Nakshatra::Rohini, Rashi::Vrishabha);
        let r = match_partners(&p, &p, MatchMode::Fourteen);
        for name in ["Dina", "Gana", "Yoni", "Rasi", "Rasi Adhipathi", "Graha Maitri", "Tara"] {
            let f = r.factors.iter().find(|f| f.name == name).unwrap();
            assert_eq!(f.earned, f.max, "{name}");
        }
        // Rajju and Nadi are avoidance factors and fail on identity.
        let rajju = r.factors.iter().find(|f| f.name == "Rajju").unwrap();
        assert_eq!(rajju.earned, 0.0);
        let nadi = r.factors.iter().find(|f| f.name == "Nadi").unwrap();
        assert_eq!(nadi.earned, 0.0);
    }

    #[test]
    fn hostile_yoni_scores_zero() {
        // Rohini is Serpent, Uttara Ashadha is Mongoose.
        let b = partner(Nakshatra::Rohini, Rashi::Vrishabha);
        let g = partner(Nakshatra::UttaraAshadha, Rashi::Makara);
        let r = match_partners(&b, &g, MatchMode::Ten);
        let yoni = r.factors.iter().find(|f| f.name == "Yoni").unwrap();
        assert_eq!(yoni.earned, 0.0);
        assert_eq!(yoni.status, MatchStatus::Poor);
    }

    #[test]
    fn friendly_yoni_earns_full_marks() {
        // Krittika is Sheep, Shatabhisha is Horse: a friendly pair.
        let b = partner(Nakshatra::Krittika, Rashi::Mithuna);
        let g = partner(Nakshatra::Shatabhisha, Rashi::Kanya);
        let r = match_partners(&b, &g, MatchMode::Ten);
        let yoni = r.factors.iter().find(|f| f.name == "Yoni").unwrap();
        assert_eq!(yoni.earned, yoni.max);
    }

    #[test]
    fn fully_compatible_pair_scores_100() {
        // Krittika → Shatabhisha counts 22: a good dina remainder, a
        // mahendra count, and long stree deergha. Both Rakshasa gana,
        // friendly yonis, different rajjus, no vedha. Mithuna and Kanya
        // share Buddh as lord, sit 4 apart, and are mutually vasya.
        let b = partner(Nakshatra::Krittika, Rashi::Mithuna);
        let g = partner(Nakshatra::Shatabhisha, Rashi::Kanya);
        let r = match_partners(&b, &g, MatchMode::Ten);
        for f in &r.factors {
            assert_eq!(f.earned, f.max, "{}", f.name);
        }
        assert_eq!(r.earned, 37.0);
        assert_eq!(r.score, 100);
        assert_eq!(r.status, MatchStatus::Excellent);
    }

    #[test]
    fn vedha_pair_fails() {
        let b = partner(Nakshatra::Ashwini, Rashi::Mesha);
        let g = partner(Nakshatra::Jyeshtha, Rashi::Vrischika);
        let r = match_partners(&b, &g, MatchMode::Ten);
        let vedha = r.factors.iter().find(|f| f.name == "Vedha").unwrap();
        assert_eq!(vedha.earned, 0.0);
    }

    #[test]
    fn status_tiers() {
        assert_eq!(MatchStatus::from_score(95.0), MatchStatus::Excellent);
        assert_eq!(MatchStatus::from_score(90.0), MatchStatus::Excellent);
        assert_eq!(MatchStatus::from_score(75.0), MatchStatus::Good);
        assert_eq!(MatchStatus::from_score(50.0), MatchStatus::Average);
        assert_eq!(MatchStatus::from_score(39.9), MatchStatus::Poor);
    }

    #[test]
    fn quick_check_parses_names() {
        let r = quick_check("Rohini", "Rishabam", "Hasta", "Virgo", MatchMode::Ten);
        assert!(r.is_ok());
        let err = quick_check("Polaris", "Rishabam", "Hasta", "Virgo", MatchMode::Ten);
        assert!(err.is_err());
    }

    #[test]
    fn overall_score_is_earned_fraction() {
        let b = partner(Nakshatra::Rohini, Rashi::Vrishabha);
        let g = partner(Nakshatra::Hasta, Rashi::Kanya);
        let r = match_partners(&b, &g, MatchMode::Ten);
        let expected = (r.earned / r.max * 100.0).round() as u8;
        assert_eq!(r.score, expected);
    }
}
