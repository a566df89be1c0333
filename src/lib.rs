//! Facade crate for the cityfit scoring engine.
//!
//! This crate re-exports the core domain types and the scoring engine so
//! callers can depend on a single crate. The engine turns a list of
//! per-city metric records plus one user preference record into six
//! bounded 0-100 category scores and a ranked composite.

#![forbid(unsafe_code)]

pub use cityfit_core::{
    AgeBand, AgeMix, Category, CategoryScorer, CategoryScores, CityMetrics, CityScore,
    ClimateMetrics, ClimatePreferences, CostMetrics, CostPreferences, CulturalMetrics,
    DatingPreferences, DemographicMetrics, DemographicPreferences, EntertainmentPreferences,
    ExclusionReason, HousingPersona, League, MinorityGroup, MinorityPreference, NEUTRAL_SCORE,
    PercentileCache, PercentileMetric, PoliticalLean, PreferenceError, PurchasingPowerCalculator,
    PurchasingPowerInputs, QualityOfLifeMetrics, QualityOfLifePreferences, Ranking, Seeking,
    UserPreferences, ValuesPreferences, WorkPersona,
};

pub use cityfit_scorer::CityRanker;

#[cfg(feature = "test-support")]
pub use cityfit_core::test_support;
