//! Values scoring: political alignment with turnout, religious-tradition
//! presence against national adherence averages, and religious
//! diversity, with a dealbreaker rule for severe political mismatches.

use cityfit_core::{
    Category, CategoryScorer, CityMetrics, CulturalMetrics, NEUTRAL_SCORE, PercentileCache,
    UserPreferences, ValuesPreferences,
};

use crate::{Blend, alignment_score};

/// National turnout reference, percent.
const TURNOUT_BASELINE: f64 = 60.0;
/// Points of adjustment per turnout point, and its cap.
const TURNOUT_STEP: f64 = 0.4;
const TURNOUT_CAP: f64 = 8.0;

/// Political importance past which a severe mismatch poisons the whole
/// category.
const DEALBREAKER_WEIGHT: f64 = 70.0;
/// Political sub-score under which the dealbreaker fires.
const DEALBREAKER_SCORE: f64 = 40.0;

/// National religious adherence, per 1000 residents, by tradition slug.
const NATIONAL_ADHERENTS_PER_1000: &[(&str, f64)] = &[
    ("evangelical", 176.0),
    ("mainline", 104.0),
    ("catholic", 187.0),
    ("black-protestant", 47.0),
    ("lds", 20.0),
    ("jewish", 19.0),
    ("muslim", 9.0),
    ("orthodox", 5.0),
    ("buddhist", 7.0),
    ("hindu", 6.0),
];

fn national_rate(tradition: &str) -> Option<f64> {
    NATIONAL_ADHERENTS_PER_1000
        .iter()
        .find(|(slug, _)| *slug == tradition)
        .map(|(_, rate)| *rate)
}

/// Tiered presence score from the city/national concentration ratio.
fn concentration_tier(ratio: f64) -> f64 {
    if ratio >= 2.0 {
        95.0
    } else if ratio >= 1.5 {
        85.0
    } else if ratio >= 1.0 {
        70.0
    } else if ratio >= 0.5 {
        55.0
    } else {
        40.0
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "political sub-score adds a bounded turnout adjustment"
)]
fn political(cultural: &CulturalMetrics, values: &ValuesPreferences) -> Option<f64> {
    let index = cultural.partisan_index?;
    let base = alignment_score(index, values.political_lean, values.political_weight)?;
    let adjustment = cultural
        .voter_turnout_percent
        .filter(|turnout| turnout.is_finite())
        .map_or(0.0, |turnout| {
            ((turnout - TURNOUT_BASELINE) * TURNOUT_STEP).clamp(-TURNOUT_CAP, TURNOUT_CAP)
        });
    Some((base + adjustment).clamp(0.0, 100.0))
}

#[expect(
    clippy::float_arithmetic,
    reason = "presence compares local adherence against the national rate"
)]
fn religious_presence(cultural: &CulturalMetrics, values: &ValuesPreferences) -> Option<f64> {
    let tradition = values.religion.as_deref()?;
    let local = cultural
        .adherents_per_1000
        .get(tradition)
        .copied()
        .filter(|rate| rate.is_finite() && *rate >= 0.0)?;
    let national = national_rate(tradition)?;
    Some(concentration_tier(local / national))
}

/// Scale factor for a severe political mismatch, in `0.5..=1.0`.
#[expect(
    clippy::float_arithmetic,
    reason = "penalty factor is proportional to how far below the floor the score fell"
)]
fn dealbreaker_factor(political_score: f64) -> f64 {
    0.5 + (political_score / DEALBREAKER_SCORE) * 0.5
}

/// Scores political and religious alignment.
#[derive(Debug, Default, Copy, Clone)]
pub struct ValuesScorer;

impl CategoryScorer for ValuesScorer {
    fn category(&self) -> Category {
        Category::Values
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the dealbreaker multiplies the blended category score"
    )]
    fn score(&self, city: &CityMetrics, prefs: &UserPreferences, _cache: &PercentileCache) -> f64 {
        let Some(cultural) = city.cultural.as_ref() else {
            return NEUTRAL_SCORE;
        };
        let values = &prefs.values;

        let political_score = political(cultural, values);
        let mut blend = Blend::new();
        blend.add_maybe(political_score, values.political_weight);
        blend.add_maybe(religious_presence(cultural, values), values.religion_weight);
        blend.add_maybe(
            cultural
                .religious_diversity_index()
                .map(|index| (index * 100.0).clamp(0.0, 100.0)),
            values.religious_diversity_weight,
        );

        let mut score = blend.score_or_neutral();
        // A severe values conflict must not be diluted away by unrelated
        // religious-diversity points.
        if let Some(political_value) = political_score {
            if values.political_weight > DEALBREAKER_WEIGHT && political_value < DEALBREAKER_SCORE
            {
                score *= dealbreaker_factor(political_value);
            }
        }
        Self::sanitise(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityfit_core::PoliticalLean;
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn city_with_cultural(cultural: CulturalMetrics) -> CityMetrics {
        CityMetrics {
            cultural: Some(cultural),
            ..CityMetrics::new(1, "values-city")
        }
    }

    fn score(city: &CityMetrics, prefs: &UserPreferences) -> f64 {
        let cache = PercentileCache::from_cities(std::slice::from_ref(city));
        ValuesScorer.score(city, prefs, &cache)
    }

    #[rstest]
    fn aligned_city_scores_high() {
        let city = city_with_cultural(CulturalMetrics {
            partisan_index: Some(-0.7),
            voter_turnout_percent: Some(70.0),
            ..CulturalMetrics::default()
        });
        let mut prefs = UserPreferences::default();
        prefs.values.political_lean = PoliticalLean::StrongDem;
        assert!(score(&city, &prefs) > 90.0);
    }

    #[rstest]
    fn dealbreaker_poisons_the_whole_category() {
        let cultural = CulturalMetrics {
            partisan_index: Some(0.8),
            adherents_per_1000: BTreeMap::from([
                ("catholic".to_owned(), 200.0),
                ("jewish".to_owned(), 30.0),
                ("mainline".to_owned(), 90.0),
            ]),
            ..CulturalMetrics::default()
        };
        let city = city_with_cultural(cultural);
        let mut severe = UserPreferences::default();
        severe.values.political_lean = PoliticalLean::StrongDem;
        severe.values.political_weight = 90.0;
        let mut casual = UserPreferences::default();
        casual.values.political_lean = PoliticalLean::StrongDem;
        casual.values.political_weight = 60.0;
        let poisoned = score(&city, &severe);
        let merely_low = score(&city, &casual);
        assert!(poisoned < merely_low);
    }

    #[rstest]
    #[case(200.0, 70.0)]
    #[case(300.0, 85.0)]
    #[case(400.0, 95.0)]
    #[case(80.0, 40.0)]
    fn presence_tiers_follow_concentration(#[case] local: f64, #[case] expected: f64) {
        let cultural = CulturalMetrics {
            adherents_per_1000: BTreeMap::from([("catholic".to_owned(), local)]),
            ..CulturalMetrics::default()
        };
        let mut values = ValuesPreferences::default();
        values.religion = Some("catholic".to_owned());
        assert_eq!(religious_presence(&cultural, &values), Some(expected));
    }

    #[rstest]
    fn unknown_tradition_drops_the_sub_metric() {
        let cultural = CulturalMetrics {
            adherents_per_1000: BTreeMap::from([("druid".to_owned(), 12.0)]),
            ..CulturalMetrics::default()
        };
        let mut values = ValuesPreferences::default();
        values.religion = Some("druid".to_owned());
        assert!(religious_presence(&cultural, &values).is_none());
    }

    #[rstest]
    fn neutral_lean_leaves_religion_to_decide() {
        let city = city_with_cultural(CulturalMetrics {
            partisan_index: Some(0.9),
            adherents_per_1000: BTreeMap::from([("jewish".to_owned(), 40.0)]),
            ..CulturalMetrics::default()
        });
        let mut prefs = UserPreferences::default();
        prefs.values.religion = Some("jewish".to_owned());
        prefs.values.religious_diversity_weight = 0.0;
        // Neutral lean: the lopsided partisan index must not affect the
        // score, leaving the strong jewish presence alone (40/19 > 2x).
        let value = score(&city, &prefs);
        assert_eq!(value, 95.0);
    }

    #[rstest]
    fn missing_record_is_neutral() {
        let city = CityMetrics::new(3, "empty");
        assert_eq!(score(&city, &UserPreferences::default()), NEUTRAL_SCORE);
    }
}
