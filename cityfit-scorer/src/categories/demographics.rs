//! Demographics scoring: diversity, age fit, education, foreign-born
//! share, minority-community presence, and economic health, with a soft
//! population floor and an optional dating-favorability blend.

use cityfit_core::{
    AgeMix, Category, CategoryScorer, CityMetrics, DemographicMetrics, NEUTRAL_SCORE,
    PercentileCache, PercentileMetric, UserPreferences,
};

use crate::{Blend, percentile_score, presence_score, range_score};

use super::dating;

/// Bachelor's-degree attainment window, percent.
const BACHELORS_MIN: f64 = 15.0;
const BACHELORS_MAX: f64 = 60.0;
/// Graduate-degree attainment window, percent.
const GRADUATE_MIN: f64 = 5.0;
const GRADUATE_MAX: f64 = 30.0;

/// Foreign-born share window, percent.
const FOREIGN_BORN_MIN: f64 = 0.0;
const FOREIGN_BORN_MAX: f64 = 40.0;

/// Maximum points the population floor can subtract.
const POPULATION_PENALTY_CAP: f64 = 50.0;

/// Hand-tuned fit table for a young-skewing preference over the 20-34
/// share.
fn young_fit(share: f64) -> f64 {
    if share >= 30.0 {
        95.0
    } else if share >= 25.0 {
        85.0
    } else if share >= 20.0 {
        70.0
    } else if share >= 15.0 {
        55.0
    } else {
        40.0
    }
}

/// Hand-tuned fit table for a mature-skewing preference over the 55+
/// share.
fn mature_fit(share: f64) -> f64 {
    if share >= 35.0 {
        95.0
    } else if share >= 30.0 {
        85.0
    } else if share >= 25.0 {
        70.0
    } else if share >= 20.0 {
        55.0
    } else {
        40.0
    }
}

/// Hand-tuned fit table for a balanced preference: the flatter the three
/// age bands, the better.
#[expect(
    clippy::float_arithmetic,
    reason = "spread is the difference between the largest and smallest band"
)]
fn mixed_fit(bands: [f64; 3]) -> f64 {
    let largest = bands.iter().copied().fold(f64::MIN, f64::max);
    let smallest = bands.iter().copied().fold(f64::MAX, f64::min);
    let spread = largest - smallest;
    if spread >= 25.0 {
        45.0
    } else if spread >= 15.0 {
        65.0
    } else if spread >= 8.0 {
        85.0
    } else {
        95.0
    }
}

/// Coarse fallback when the age-band shares are missing but the median
/// age is not.
#[expect(
    clippy::float_arithmetic,
    reason = "the mature table mirrors the young table around its midpoint"
)]
fn median_age_fit(median_age: f64, mix: AgeMix) -> f64 {
    let young_leaning = if median_age <= 32.0 {
        85.0
    } else if median_age <= 36.0 {
        65.0
    } else if median_age <= 40.0 {
        50.0
    } else {
        35.0
    };
    match mix {
        AgeMix::Young => young_leaning,
        AgeMix::Mature => 120.0 - young_leaning,
        AgeMix::Mixed => 70.0,
    }
}

fn mixed_banded(demographics: &DemographicMetrics) -> Option<f64> {
    let young = demographics.pct_age_20_34?;
    let middle = demographics.pct_age_35_54?;
    let mature = demographics.pct_age_55_plus?;
    Some(mixed_fit([young, middle, mature]))
}

fn age_fit(demographics: &DemographicMetrics, mix: AgeMix) -> Option<f64> {
    let banded = match mix {
        AgeMix::Young => demographics.pct_age_20_34.map(young_fit),
        AgeMix::Mature => demographics.pct_age_55_plus.map(mature_fit),
        AgeMix::Mixed => mixed_banded(demographics),
    };
    banded.or_else(|| demographics.median_age.map(|age| median_age_fit(age, mix)))
}

/// Educational attainment, weighted towards bachelor's degrees with a
/// graduate-degree kicker.
fn attainment(demographics: &DemographicMetrics) -> Option<f64> {
    let mut blend = Blend::new();
    blend.add_maybe(
        demographics
            .bachelors_percent
            .map(|share| range_score(share, BACHELORS_MIN, BACHELORS_MAX, false)),
        70.0,
    );
    blend.add_maybe(
        demographics
            .graduate_percent
            .map(|share| range_score(share, GRADUATE_MIN, GRADUATE_MAX, false)),
        30.0,
    );
    blend.has_weight().then(|| blend.score_or_neutral())
}

fn economic_health(
    demographics: &DemographicMetrics,
    cache: &PercentileCache,
) -> Option<f64> {
    let mut blend = Blend::new();
    blend.add_maybe(
        demographics.median_household_income.map(|income| {
            percentile_score(income, cache.values(PercentileMetric::HouseholdIncome), true)
        }),
        1.0,
    );
    blend.add_maybe(
        demographics.poverty_rate.map(|rate| {
            percentile_score(rate, cache.values(PercentileMetric::PovertyRate), false)
        }),
        1.0,
    );
    blend.has_weight().then(|| blend.score_or_neutral())
}

/// Up to 50 points off, proportional to the fractional shortfall below
/// the user's minimum population. A soft floor, not a filter.
#[expect(
    clippy::float_arithmetic,
    reason = "penalty scales with the fractional shortfall"
)]
fn population_penalty(population: Option<f64>, minimum: Option<f64>) -> f64 {
    let Some(floor) = minimum.filter(|m| *m > 0.0) else {
        return 0.0;
    };
    let Some(actual) = population.filter(|p| p.is_finite() && *p >= 0.0) else {
        return 0.0;
    };
    if actual >= floor {
        return 0.0;
    }
    POPULATION_PENALTY_CAP * (1.0 - actual / floor)
}

/// Scores population makeup and community fit.
#[derive(Debug, Default, Copy, Clone)]
pub struct DemographicsScorer;

impl CategoryScorer for DemographicsScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the dating blend and population floor adjust the blended score"
    )]
    fn score(&self, city: &CityMetrics, prefs: &UserPreferences, cache: &PercentileCache) -> f64 {
        let Some(demographics) = city.demographics.as_ref() else {
            return NEUTRAL_SCORE;
        };
        let weights = &prefs.demographics;

        let mut blend = Blend::new();
        blend.add_maybe(
            demographics.diversity_index().map(|index| {
                percentile_score(index, cache.values(PercentileMetric::DiversityIndex), true)
            }),
            weights.diversity_weight,
        );
        blend.add_maybe(age_fit(demographics, weights.age_mix), weights.age_fit_weight);
        blend.add_maybe(attainment(demographics), weights.education_weight);
        blend.add_maybe(
            demographics
                .foreign_born_percent
                .map(|share| range_score(share, FOREIGN_BORN_MIN, FOREIGN_BORN_MAX, false)),
            weights.foreign_born_weight,
        );
        if let Some(minority) = weights.minority.as_ref() {
            let share = demographics.minority_share(minority.group, minority.subgroup.as_deref());
            blend.add_maybe(
                share.map(|actual| presence_score(actual, minority.min_percent)),
                minority.importance,
            );
        }
        blend.add_maybe(economic_health(demographics, cache), weights.economic_weight);

        let dating_fraction = (weights.dating.blend_percent.clamp(0.0, 100.0)) / 100.0;
        if !blend.has_weight() && dating_fraction <= 0.0 {
            return NEUTRAL_SCORE;
        }

        let mut score = blend.score_or_neutral();
        if dating_fraction > 0.0 {
            let dating_score = dating::score(city, prefs, cache);
            score = (1.0 - dating_fraction) * score + dating_fraction * dating_score;
        }
        score -= population_penalty(demographics.population, weights.min_population);
        Self::sanitise(score)
    }

    fn category(&self) -> Category {
        Category::Demographics
    }
}
