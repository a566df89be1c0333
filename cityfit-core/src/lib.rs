//! Core domain types for the cityfit scoring engine.
//!
//! The crate defines the read-only city metric records supplied by
//! upstream ingestion, the user preference configuration, the scored
//! output records, the run-scoped percentile cache, and the trait seams
//! the engine is built against ([`CategoryScorer`],
//! [`PurchasingPowerCalculator`]). It performs no I/O and holds no
//! global state; everything here is created fresh per scoring run.

#![forbid(unsafe_code)]

mod category;
mod metrics;
mod percentile;
mod preferences;
mod score;
mod scorer;

pub mod purchasing_power;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use category::Category;
pub use metrics::{
    CityMetrics, ClimateMetrics, CostMetrics, CulturalMetrics, DemographicMetrics, League,
    MinorityGroup, QualityOfLifeMetrics,
};
pub use percentile::{PercentileCache, PercentileMetric};
pub use preferences::{
    AgeBand, AgeMix, ClimatePreferences, CostPreferences, DEFAULT_WEIGHT, DatingPreferences,
    DemographicPreferences, EntertainmentPreferences, HousingPersona, MinorityPreference,
    PoliticalLean, PreferenceError, QualityOfLifePreferences, Seeking, UserPreferences,
    ValuesPreferences, WorkPersona,
};
pub use purchasing_power::{PurchasingPowerCalculator, PurchasingPowerInputs};
pub use score::{CategoryScores, CityScore, ExclusionReason, NEUTRAL_SCORE, Ranking};
pub use scorer::CategoryScorer;
