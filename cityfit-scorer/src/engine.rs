//! Composite aggregation: run every category scorer over every city and
//! rank the results.

use log::debug;

use cityfit_core::{
    Category, CategoryScorer, CategoryScores, CityMetrics, CityScore, ExclusionReason,
    PercentileCache, PurchasingPowerCalculator, Ranking, UserPreferences,
};

use crate::categories::{
    ClimateScorer, CostScorer, DemographicsScorer, EntertainmentScorer, QualityOfLifeScorer,
    ValuesScorer,
};

/// The scoring engine: a pure, synchronous computation over one city set
/// and one preference record.
///
/// The percentile cache is rebuilt from the exact city set of every
/// [`CityRanker::rank`] call and threaded into the scorers by parameter,
/// so concurrent rankings over different subsets can never read each
/// other's distributions.
///
/// # Examples
/// ```
/// use cityfit_core::test_support::{FlatParityCalculator, sample_city};
/// use cityfit_core::UserPreferences;
/// use cityfit_scorer::CityRanker;
///
/// let ranker = CityRanker::new(FlatParityCalculator);
/// let cities = vec![sample_city(1, "Columbus"), sample_city(2, "Dayton")];
/// let ranking = ranker.rank(&cities, &UserPreferences::default());
/// assert_eq!(ranking.included, 2);
/// assert!(ranking.scores.iter().all(|s| (0.0..=100.0).contains(&s.total_score)));
/// ```
#[derive(Debug, Clone)]
pub struct CityRanker<C> {
    calculator: C,
}

impl<C: PurchasingPowerCalculator> CityRanker<C> {
    /// Build a ranker around the purchasing-power collaborator.
    #[must_use]
    pub const fn new(calculator: C) -> Self {
        Self { calculator }
    }

    /// Score and rank `cities` under `prefs`.
    ///
    /// Output is sorted descending by total score with excluded entries
    /// last; ties break on `city_id` so identical inputs always produce
    /// identical output.
    #[must_use]
    pub fn rank(&self, cities: &[CityMetrics], prefs: &UserPreferences) -> Ranking {
        let cache = PercentileCache::from_cities(cities);
        let cost_scorer = CostScorer::new(&self.calculator);
        let scorers: [&dyn CategoryScorer; 6] = [
            &ClimateScorer,
            &cost_scorer,
            &DemographicsScorer,
            &QualityOfLifeScorer,
            &ValuesScorer,
            &EntertainmentScorer,
        ];

        let mut scores: Vec<CityScore> = cities
            .iter()
            .map(|city| score_city(city, prefs, &cache, &scorers))
            .collect();
        scores.sort_by(|a, b| {
            a.excluded
                .is_some()
                .cmp(&b.excluded.is_some())
                .then_with(|| b.total_score.total_cmp(&a.total_score))
                .then_with(|| a.city_id.cmp(&b.city_id))
        });

        let excluded = scores.iter().filter(|score| score.excluded.is_some()).count();
        let included = scores.len() - excluded;
        debug!("ranked {included} cities ({excluded} excluded)");
        Ranking {
            scores,
            included,
            excluded,
        }
    }
}

fn score_city(
    city: &CityMetrics,
    prefs: &UserPreferences,
    cache: &PercentileCache,
    scorers: &[&dyn CategoryScorer; 6],
) -> CityScore {
    if !city.has_any_data() {
        return CityScore {
            city_id: city.id,
            name: city.name.clone(),
            categories: CategoryScores::neutral(),
            total_score: 0.0,
            excluded: Some(ExclusionReason::NoData),
        };
    }

    let mut categories = CategoryScores::neutral();
    for scorer in scorers {
        categories.set(scorer.category(), scorer.score(city, prefs, cache));
    }
    CityScore {
        city_id: city.id,
        name: city.name.clone(),
        categories,
        total_score: composite(&categories, prefs),
        excluded: None,
    }
}

/// Weighted mean of the category scores; zero when every category weight
/// is zero, so an all-zeroes preference record ranks everything last
/// without flagging it.
#[expect(
    clippy::float_arithmetic,
    reason = "the composite is a weighted mean over the six categories"
)]
fn composite(categories: &CategoryScores, prefs: &UserPreferences) -> f64 {
    let mut weighted_total = 0.0;
    let mut total_weight = 0.0;
    for category in Category::ALL {
        let weight = prefs.weight(category);
        if weight > 0.0 && weight.is_finite() {
            weighted_total += categories.get(category) * weight;
            total_weight += weight;
        }
    }
    if total_weight <= 0.0 {
        return 0.0;
    }
    (weighted_total / total_weight).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityfit_core::test_support::{FlatParityCalculator, empty_city, sample_city};
    use rstest::rstest;

    #[rstest]
    fn zero_category_weights_sink_without_excluding() {
        let ranker = CityRanker::new(FlatParityCalculator);
        let cities = vec![sample_city(1, "Columbus")];
        let mut prefs = UserPreferences::default();
        prefs.set_all_weights(0.0);
        let ranking = ranker.rank(&cities, &prefs);
        let score = ranking.scores.first().expect("one city");
        assert_eq!(score.total_score, 0.0);
        assert!(score.excluded.is_none());
    }

    #[rstest]
    fn dataless_cities_are_excluded_and_sorted_last() {
        let ranker = CityRanker::new(FlatParityCalculator);
        let cities = vec![empty_city(1, "Ghost Town"), sample_city(2, "Columbus")];
        let ranking = ranker.rank(&cities, &UserPreferences::default());
        assert_eq!(ranking.included, 1);
        assert_eq!(ranking.excluded, 1);
        let last = ranking.scores.last().expect("two cities");
        assert_eq!(last.city_id, 1);
        assert_eq!(last.excluded, Some(ExclusionReason::NoData));
    }

    #[rstest]
    fn ties_break_on_city_id() {
        let ranker = CityRanker::new(FlatParityCalculator);
        let cities = vec![sample_city(9, "Twin B"), sample_city(3, "Twin A")];
        let ranking = ranker.rank(&cities, &UserPreferences::default());
        let ids: Vec<u64> = ranking.scores.iter().map(|score| score.city_id).collect();
        assert_eq!(ids, vec![3, 9]);
    }
}
