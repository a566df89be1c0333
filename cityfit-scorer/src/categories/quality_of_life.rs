//! Quality-of-life scoring: walkability, safety, air quality,
//! broadband, schools, and healthcare access.
//!
//! Walk Score arrives already normalised to 0-100 and is used raw;
//! percentile-ranking it again would double-penalise the metric.

use cityfit_core::{
    Category, CategoryScorer, CityMetrics, NEUTRAL_SCORE, PercentileCache,
    QualityOfLifeMetrics, UserPreferences,
};

use crate::{Blend, range_score};

/// Violent-crime anchor, incidents per 100k.
const CRIME_MAX: f64 = 800.0;
/// Largest trend adjustment in either direction, points.
const TREND_CAP: f64 = 10.0;
/// Healthy-air-days window, percent.
const AIR_MIN: f64 = 70.0;
const AIR_MAX: f64 = 99.0;
/// Broadband competition bonus: points per provider past the second,
/// capped.
const PROVIDER_BONUS_STEP: f64 = 3.0;
const PROVIDER_BONUS_CAP: f64 = 15.0;
/// Student/teacher ratio window.
const RATIO_MIN: f64 = 12.0;
const RATIO_MAX: f64 = 22.0;
/// Graduation-rate window, percent.
const GRADUATION_MIN: f64 = 80.0;
const GRADUATION_MAX: f64 = 95.0;
/// Physicians per 100k window.
const PHYSICIANS_MIN: f64 = 40.0;
const PHYSICIANS_MAX: f64 = 120.0;
/// HPSA shortage penalty: points per score unit, capped.
const HPSA_PENALTY_STEP: f64 = 1.5;
const HPSA_PENALTY_CAP: f64 = 30.0;

/// Walk and transit scores arrive on the 0-100 scale and are used raw,
/// walk-heavy. The soft minimum scales the walk component down
/// proportionally instead of filtering the city.
#[expect(
    clippy::float_arithmetic,
    reason = "the soft walk-score threshold scales the raw score"
)]
fn walkability(qol: &QualityOfLifeMetrics, min_walk: Option<f64>) -> Option<f64> {
    let mut blend = Blend::new();
    if let Some(walk) = qol.walk_score.filter(|value| value.is_finite()) {
        let scaled = match min_walk.filter(|minimum| *minimum > 0.0) {
            Some(minimum) if walk < minimum => walk * (walk / minimum),
            _ => walk,
        };
        blend.add(scaled.clamp(0.0, 100.0), 80.0);
    }
    blend.add_maybe(qol.transit_score, 20.0);
    blend.has_weight().then(|| blend.score_or_neutral())
}

#[expect(
    clippy::float_arithmetic,
    reason = "safety adds a bounded trend adjustment to the anchored base"
)]
fn safety(qol: &QualityOfLifeMetrics) -> Option<f64> {
    let base = qol
        .violent_crime_rate
        .map(|rate| range_score(rate, 0.0, CRIME_MAX, true))?;
    // A falling trend (negative percent change) earns a bonus, a rising
    // one a penalty.
    let adjustment = qol
        .crime_trend_3yr_percent
        .filter(|trend| trend.is_finite())
        .map_or(0.0, |trend| (-trend * 0.5).clamp(-TREND_CAP, TREND_CAP));
    Some((base + adjustment).clamp(0.0, 100.0))
}

#[expect(
    clippy::float_arithmetic,
    reason = "broadband adds a provider-competition bonus to fiber coverage"
)]
fn broadband(qol: &QualityOfLifeMetrics) -> Option<f64> {
    let fiber = qol.fiber_coverage_percent.filter(|value| value.is_finite())?;
    let bonus = qol.broadband_providers.map_or(0.0, |providers| {
        (PROVIDER_BONUS_STEP * f64::from(providers.saturating_sub(2))).min(PROVIDER_BONUS_CAP)
    });
    Some((fiber + bonus).clamp(0.0, 100.0))
}

fn education(qol: &QualityOfLifeMetrics) -> Option<f64> {
    let mut blend = Blend::new();
    blend.add_maybe(
        qol.student_teacher_ratio
            .map(|ratio| range_score(ratio, RATIO_MIN, RATIO_MAX, true)),
        60.0,
    );
    blend.add_maybe(
        qol.graduation_rate_percent
            .map(|rate| range_score(rate, GRADUATION_MIN, GRADUATION_MAX, false)),
        40.0,
    );
    blend.has_weight().then(|| blend.score_or_neutral())
}

#[expect(
    clippy::float_arithmetic,
    reason = "healthcare subtracts the shortage penalty from the anchored base"
)]
fn healthcare(qol: &QualityOfLifeMetrics) -> Option<f64> {
    let base = qol
        .physicians_per_100k
        .map(|rate| range_score(rate, PHYSICIANS_MIN, PHYSICIANS_MAX, false))?;
    let penalty = qol
        .hpsa_score
        .filter(|score| score.is_finite() && *score > 0.0)
        .map_or(0.0, |score| (HPSA_PENALTY_STEP * score).min(HPSA_PENALTY_CAP));
    Some((base - penalty).clamp(0.0, 100.0))
}

/// Scores walkability, safety, and local services.
#[derive(Debug, Default, Copy, Clone)]
pub struct QualityOfLifeScorer;

impl CategoryScorer for QualityOfLifeScorer {
    fn category(&self) -> Category {
        Category::QualityOfLife
    }

    fn score(&self, city: &CityMetrics, prefs: &UserPreferences, _cache: &PercentileCache) -> f64 {
        let Some(qol) = city.quality_of_life.as_ref() else {
            return NEUTRAL_SCORE;
        };
        let weights = &prefs.quality_of_life;

        let mut blend = Blend::new();
        blend.add_maybe(
            walkability(qol, weights.min_walk_score),
            weights.walkability_weight,
        );
        blend.add_maybe(safety(qol), weights.safety_weight);
        blend.add_maybe(
            qol.air_quality_good_percent
                .map(|share| range_score(share, AIR_MIN, AIR_MAX, false)),
            weights.air_quality_weight,
        );
        blend.add_maybe(broadband(qol), weights.broadband_weight);
        blend.add_maybe(education(qol), weights.education_weight);
        blend.add_maybe(healthcare(qol), weights.healthcare_weight);

        Self::sanitise(blend.score_or_neutral())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn city_with_qol(qol: QualityOfLifeMetrics) -> CityMetrics {
        CityMetrics {
            quality_of_life: Some(qol),
            ..CityMetrics::new(1, "qol-city")
        }
    }

    fn score(city: &CityMetrics, prefs: &UserPreferences) -> f64 {
        let cache = PercentileCache::from_cities(std::slice::from_ref(city));
        QualityOfLifeScorer.score(city, prefs, &cache)
    }

    fn safety_only_prefs() -> UserPreferences {
        let mut prefs = UserPreferences::default();
        prefs.quality_of_life.walkability_weight = 0.0;
        prefs.quality_of_life.air_quality_weight = 0.0;
        prefs.quality_of_life.broadband_weight = 0.0;
        prefs.quality_of_life.education_weight = 0.0;
        prefs.quality_of_life.healthcare_weight = 0.0;
        prefs
    }

    #[rstest]
    fn low_crime_city_scores_high_under_safety_only() {
        let city = city_with_qol(QualityOfLifeMetrics {
            violent_crime_rate: Some(100.0),
            ..QualityOfLifeMetrics::default()
        });
        let value = score(&city, &safety_only_prefs());
        assert!(value > 85.0, "got {value}");
    }

    #[rstest]
    fn falling_crime_trend_earns_a_bonus() {
        let flat = city_with_qol(QualityOfLifeMetrics {
            violent_crime_rate: Some(400.0),
            ..QualityOfLifeMetrics::default()
        });
        let improving = city_with_qol(QualityOfLifeMetrics {
            violent_crime_rate: Some(400.0),
            crime_trend_3yr_percent: Some(-12.0),
            ..QualityOfLifeMetrics::default()
        });
        let prefs = safety_only_prefs();
        assert!(score(&improving, &prefs) > score(&flat, &prefs));
    }

    #[rstest]
    fn walk_score_below_minimum_scales_down() {
        let city = city_with_qol(QualityOfLifeMetrics {
            walk_score: Some(40.0),
            ..QualityOfLifeMetrics::default()
        });
        let mut prefs = UserPreferences::default();
        prefs.quality_of_life.min_walk_score = Some(60.0);
        let constrained = score(&city, &prefs);
        let unconstrained = score(&city, &UserPreferences::default());
        assert!(constrained < unconstrained);
    }

    #[rstest]
    fn provider_competition_bonus_is_capped() {
        let modest = broadband(&QualityOfLifeMetrics {
            fiber_coverage_percent: Some(50.0),
            broadband_providers: Some(4),
            ..QualityOfLifeMetrics::default()
        });
        let crowded = broadband(&QualityOfLifeMetrics {
            fiber_coverage_percent: Some(50.0),
            broadband_providers: Some(30),
            ..QualityOfLifeMetrics::default()
        });
        assert_eq!(modest, Some(56.0));
        assert_eq!(crowded, Some(65.0));
    }

    #[rstest]
    fn hpsa_shortage_drags_healthcare_down() {
        let supplied = healthcare(&QualityOfLifeMetrics {
            physicians_per_100k: Some(100.0),
            ..QualityOfLifeMetrics::default()
        });
        let shorted = healthcare(&QualityOfLifeMetrics {
            physicians_per_100k: Some(100.0),
            hpsa_score: Some(10.0),
            ..QualityOfLifeMetrics::default()
        });
        assert_eq!(supplied, Some(75.0));
        assert_eq!(shorted, Some(60.0));
    }

    #[rstest]
    fn missing_record_is_neutral() {
        let city = CityMetrics::new(2, "empty");
        assert_eq!(score(&city, &UserPreferences::default()), NEUTRAL_SCORE);
    }
}
