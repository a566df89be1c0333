//! Dating-favorability sub-score blended into the demographics category.
//!
//! Four components: the dating pool (gender ratio for the user's age
//! band plus the never-married share), economic headroom (income left
//! after rent, ranked in-run), political alignment (shared with the
//! values category), and walkability/safety.

use cityfit_core::{CityMetrics, PercentileCache, PercentileMetric, Seeking, UserPreferences};

use crate::{Blend, alignment_score, percentile_score, range_score};

const POOL_WEIGHT: f64 = 35.0;
const ECONOMIC_WEIGHT: f64 = 25.0;
const ALIGNMENT_WEIGHT: f64 = 20.0;
const WALK_SAFETY_WEIGHT: f64 = 20.0;

/// Gender-ratio scoring window, men per 100 women.
const RATIO_MIN: f64 = 85.0;
const RATIO_MAX: f64 = 115.0;

/// Never-married share scoring window, percent.
const SINGLE_MIN: f64 = 20.0;
const SINGLE_MAX: f64 = 70.0;

/// Violent-crime anchor shared with the quality-of-life scorer.
const CRIME_MAX: f64 = 800.0;

pub(crate) fn score(city: &CityMetrics, prefs: &UserPreferences, cache: &PercentileCache) -> f64 {
    let dating = &prefs.demographics.dating;
    let mut outer = Blend::new();

    if let Some(demographics) = city.demographics.as_ref() {
        let mut pool = Blend::new();
        if let Some(seeking) = dating.seeking {
            // Seeking women favours fewer men per 100 women, and vice
            // versa.
            let invert = seeking == Seeking::Women;
            let ratio = demographics.gender_ratio(dating.age_band);
            pool.add_maybe(
                ratio.map(|value| range_score(value, RATIO_MIN, RATIO_MAX, invert)),
                1.0,
            );
        }
        pool.add_maybe(
            demographics
                .never_married_percent
                .map(|value| range_score(value, SINGLE_MIN, SINGLE_MAX, false)),
            1.0,
        );
        if pool.has_weight() {
            outer.add(pool.score_or_neutral(), POOL_WEIGHT);
        }
    }

    outer.add_maybe(
        city.disposable_income().map(|value| {
            percentile_score(value, cache.values(PercentileMetric::DisposableIncome), true)
        }),
        ECONOMIC_WEIGHT,
    );

    if let Some(index) = city.cultural.as_ref().and_then(|c| c.partisan_index) {
        outer.add_maybe(
            alignment_score(index, prefs.values.political_lean, prefs.values.political_weight),
            ALIGNMENT_WEIGHT,
        );
    }

    if let Some(qol) = city.quality_of_life.as_ref() {
        let mut walk_safety = Blend::new();
        walk_safety.add_maybe(qol.walk_score, 1.0);
        walk_safety.add_maybe(
            qol.violent_crime_rate
                .map(|rate| range_score(rate, 0.0, CRIME_MAX, true)),
            1.0,
        );
        if walk_safety.has_weight() {
            outer.add(walk_safety.score_or_neutral(), WALK_SAFETY_WEIGHT);
        }
    }

    outer.score_or_neutral()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityfit_core::test_support::sample_city;
    use cityfit_core::{AgeBand, DemographicMetrics, NEUTRAL_SCORE};
    use rstest::rstest;

    fn dating_prefs(seeking: Option<Seeking>) -> UserPreferences {
        let mut prefs = UserPreferences::default();
        prefs.demographics.dating.blend_percent = 100.0;
        prefs.demographics.dating.seeking = seeking;
        prefs.demographics.dating.age_band = AgeBand::Age18To29;
        prefs
    }

    #[rstest]
    fn empty_city_is_neutral() {
        let city = CityMetrics::new(1, "empty");
        let cache = PercentileCache::from_cities(std::slice::from_ref(&city));
        let value = score(&city, &dating_prefs(Some(Seeking::Women)), &cache);
        assert_eq!(value, NEUTRAL_SCORE);
    }

    #[rstest]
    fn ratio_direction_follows_seeking() {
        let mut city = sample_city(1, "ratio-city");
        if let Some(demographics) = city.demographics.as_mut() {
            // Noticeably more men than women in the young band.
            demographics.men_per_100_women_18_29 = Some(112.0);
            demographics.never_married_percent = None;
        }
        city.cost = None;
        city.cultural = None;
        city.quality_of_life = None;
        let cache = PercentileCache::from_cities(std::slice::from_ref(&city));
        let seeking_men = score(&city, &dating_prefs(Some(Seeking::Men)), &cache);
        let seeking_women = score(&city, &dating_prefs(Some(Seeking::Women)), &cache);
        assert!(seeking_men > seeking_women);
    }

    #[rstest]
    fn single_share_raises_the_pool() {
        let base = DemographicMetrics {
            never_married_percent: Some(25.0),
            ..DemographicMetrics::default()
        };
        let lively = DemographicMetrics {
            never_married_percent: Some(55.0),
            ..DemographicMetrics::default()
        };
        let mut quiet_city = CityMetrics::new(1, "quiet");
        quiet_city.demographics = Some(base);
        let mut single_city = CityMetrics::new(2, "single");
        single_city.demographics = Some(lively);
        let cities = vec![quiet_city.clone(), single_city.clone()];
        let cache = PercentileCache::from_cities(&cities);
        let prefs = dating_prefs(None);
        assert!(score(&single_city, &prefs, &cache) > score(&quiet_city, &prefs, &cache));
    }
}
