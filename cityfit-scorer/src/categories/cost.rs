//! Cost scoring via the purchasing-power collaborator.
//!
//! The calculator owns the persona-aware cost-of-living arithmetic; this
//! scorer only maps its index onto the score scale. When the calculator
//! cannot produce an index the scorer falls back to in-run home-price
//! ranking, and finally to the neutral score.

use cityfit_core::{
    Category, CategoryScorer, CityMetrics, NEUTRAL_SCORE, PercentileCache, PercentileMetric,
    PurchasingPowerCalculator, PurchasingPowerInputs, UserPreferences,
};

use crate::percentile_score;

/// Scores cost of living and purchasing power.
pub struct CostScorer<'a> {
    calculator: &'a dyn PurchasingPowerCalculator,
}

impl<'a> CostScorer<'a> {
    /// Wrap the collaborator used to compute purchasing-power indices.
    #[must_use]
    pub const fn new(calculator: &'a dyn PurchasingPowerCalculator) -> Self {
        Self { calculator }
    }
}

/// Map a purchasing-power index (100 = national average) onto the score
/// scale: a point of index is worth three quarters of a point of score.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "index mapping is a linear rescale around the national average"
)]
fn index_to_score(index: f64) -> f64 {
    (50.0 + (index - 100.0) * 0.75).clamp(0.0, 100.0)
}

impl CategoryScorer for CostScorer<'_> {
    fn category(&self) -> Category {
        Category::Cost
    }

    fn score(&self, city: &CityMetrics, prefs: &UserPreferences, cache: &PercentileCache) -> f64 {
        let Some(cost) = city.cost.as_ref() else {
            return NEUTRAL_SCORE;
        };
        let inputs = PurchasingPowerInputs {
            cost,
            housing: prefs.cost.housing,
            work: prefs.cost.work,
            state: city.state.as_deref(),
        };
        if let Some(index) = self
            .calculator
            .purchasing_power_index(&inputs)
            .filter(|index| index.is_finite())
        {
            return Self::sanitise(index_to_score(index));
        }
        // Cheaper homes rank higher within the current city set.
        if let Some(price) = cost.median_home_price {
            let distribution = cache.values(PercentileMetric::HomePrice);
            if !distribution.is_empty() {
                return Self::sanitise(percentile_score(price, distribution, false));
            }
        }
        NEUTRAL_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityfit_core::CostMetrics;
    use cityfit_core::test_support::FlatParityCalculator;
    use rstest::rstest;

    struct NoIndexCalculator;

    impl PurchasingPowerCalculator for NoIndexCalculator {
        fn purchasing_power_index(&self, _inputs: &PurchasingPowerInputs<'_>) -> Option<f64> {
            None
        }
    }

    struct FixedIndexCalculator(f64);

    impl PurchasingPowerCalculator for FixedIndexCalculator {
        fn purchasing_power_index(&self, _inputs: &PurchasingPowerInputs<'_>) -> Option<f64> {
            Some(self.0)
        }
    }

    fn city_with_price(id: u64, price: Option<f64>) -> CityMetrics {
        CityMetrics {
            cost: Some(CostMetrics {
                median_home_price: price,
                ..CostMetrics::default()
            }),
            ..CityMetrics::new(id, "cost-city")
        }
    }

    #[rstest]
    #[case(100.0, 50.0)]
    #[case(120.0, 65.0)]
    #[case(80.0, 35.0)]
    #[case(250.0, 100.0)]
    fn index_maps_linearly_around_parity(#[case] index: f64, #[case] expected: f64) {
        let city = city_with_price(1, None);
        let cache = PercentileCache::from_cities(std::slice::from_ref(&city));
        let calculator = FixedIndexCalculator(index);
        let score = CostScorer::new(&calculator).score(&city, &UserPreferences::default(), &cache);
        assert_eq!(score, expected);
    }

    #[rstest]
    fn falls_back_to_home_price_ranking() {
        let cities = vec![
            city_with_price(1, Some(200_000.0)),
            city_with_price(2, Some(400_000.0)),
            city_with_price(3, Some(600_000.0)),
            city_with_price(4, Some(800_000.0)),
        ];
        let cache = PercentileCache::from_cities(&cities);
        let calculator = NoIndexCalculator;
        let scorer = CostScorer::new(&calculator);
        let prefs = UserPreferences::default();
        let cheap = scorer.score(cities.first().expect("seeded"), &prefs, &cache);
        let dear = scorer.score(cities.last().expect("seeded"), &prefs, &cache);
        assert!(cheap > dear);
        assert_eq!(cheap, 100.0);
    }

    #[rstest]
    fn degrades_to_neutral_without_any_signal() {
        let city = city_with_price(1, None);
        let cache = PercentileCache::from_cities(std::slice::from_ref(&city));
        let calculator = NoIndexCalculator;
        let score = CostScorer::new(&calculator).score(&city, &UserPreferences::default(), &cache);
        assert_eq!(score, NEUTRAL_SCORE);
    }

    #[rstest]
    fn missing_cost_record_is_neutral() {
        let city = CityMetrics::new(9, "no-cost");
        let cache = PercentileCache::from_cities(std::slice::from_ref(&city));
        let calculator = FlatParityCalculator;
        let score = CostScorer::new(&calculator).score(&city, &UserPreferences::default(), &cache);
        assert_eq!(score, NEUTRAL_SCORE);
    }
}
