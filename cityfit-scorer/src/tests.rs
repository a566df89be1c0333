//! Cross-cutting unit coverage for the scorer crate.

use cityfit_core::test_support::sample_city;
use cityfit_core::{CategoryScorer, PercentileCache, UserPreferences};
use rstest::rstest;

use crate::categories::{
    ClimateScorer, DemographicsScorer, EntertainmentScorer, QualityOfLifeScorer, ValuesScorer,
};

#[rstest]
fn every_category_score_stays_bounded() {
    let city = sample_city(1, "bounded");
    let cache = PercentileCache::from_cities(std::slice::from_ref(&city));
    let prefs = UserPreferences::default();
    let scores = [
        ClimateScorer.score(&city, &prefs, &cache),
        DemographicsScorer.score(&city, &prefs, &cache),
        QualityOfLifeScorer.score(&city, &prefs, &cache),
        ValuesScorer.score(&city, &prefs, &cache),
        EntertainmentScorer.score(&city, &prefs, &cache),
    ];
    for score in scores {
        assert!(score.is_finite());
        assert!((0.0..=100.0).contains(&score), "got {score}");
    }
}

#[rstest]
fn fixed_range_categories_ignore_the_comparison_set() {
    let city = sample_city(1, "anchor");
    let alone = PercentileCache::from_cities(std::slice::from_ref(&city));
    let crowd: Vec<_> = (1..=20).map(|id| sample_city(id, "crowd")).collect();
    let crowded = PercentileCache::from_cities(&crowd);
    let prefs = UserPreferences::default();
    // Climate uses only fixed-range normalization; the cache must not
    // matter.
    assert_eq!(
        ClimateScorer.score(&city, &prefs, &alone),
        ClimateScorer.score(&city, &prefs, &crowded)
    );
}

#[rstest]
fn percentile_categories_shift_with_the_comparison_set() {
    let mut rich = sample_city(1, "rich");
    if let Some(demographics) = rich.demographics.as_mut() {
        demographics.median_household_income = Some(95_000.0);
    }
    let mut poor = sample_city(2, "poor");
    if let Some(demographics) = poor.demographics.as_mut() {
        demographics.median_household_income = Some(30_000.0);
    }

    let prefs = economic_only_prefs();
    let alone = PercentileCache::from_cities(std::slice::from_ref(&rich));
    let paired = PercentileCache::from_cities(&[rich.clone(), poor]);
    let solo_score = DemographicsScorer.score(&rich, &prefs, &alone);
    let paired_score = DemographicsScorer.score(&rich, &prefs, &paired);
    assert_ne!(solo_score, paired_score);
}

fn economic_only_prefs() -> UserPreferences {
    let mut prefs = UserPreferences::default();
    prefs.demographics.diversity_weight = 0.0;
    prefs.demographics.age_fit_weight = 0.0;
    prefs.demographics.education_weight = 0.0;
    prefs.demographics.foreign_born_weight = 0.0;
    prefs
}
