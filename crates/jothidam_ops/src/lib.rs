//! Scoring operations over charts: porutham marriage matching (ten or
//! fourteen factors plus chevvai dosha) and weighted life-area forecasts.

pub mod error;
pub mod forecast;
pub mod porutham;
pub mod porutham_data;

pub use error::OpsError;
pub use forecast::{
    ALL_LIFE_AREAS, AreaForecast, ForecastFactor, ForecastSpan, LifeArea, forecast_all,
    forecast_area, forecast_with_dasha,
};
pub use porutham::{
    ChevvaiDosha, FactorResult, MatchMode, MatchStatus, Partner, PoruthamReport,
    has_chevvai_dosha, match_charts, match_partners, quick_check,
};
pub use porutham_data::{Gana, Nadi, Rajju, Yoni, gana_of, nadi_of, rajju_of, yoni_of};
