//! Run-scoped percentile cache.
//!
//! Percentile-ranked sub-metrics are scored against the distribution of
//! that metric across the cities in the *current* run, so the sorted
//! value arrays must be rebuilt from exactly the city set passed to the
//! invocation and threaded into every scorer call by parameter. Reusing
//! a cache across different city sets silently returns stale ranks; the
//! type is deliberately cheap to rebuild.

use std::collections::BTreeMap;

use log::debug;

use crate::CityMetrics;

/// Metrics ranked against the current city set rather than fixed bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PercentileMetric {
    /// Median household income; higher is better.
    HouseholdIncome,
    /// Poverty rate; lower is better.
    PovertyRate,
    /// Median home price; lower is better for the cost fallback.
    HomePrice,
    /// Simpson diversity index over race/ethnicity shares.
    DiversityIndex,
    /// Income remaining after annualised median rent.
    DisposableIncome,
    /// Maintained trail miles.
    TrailMiles,
    /// Park acres per 10k residents.
    ParkAcres,
    /// Protected-land share.
    ProtectedLand,
}

impl PercentileMetric {
    /// Every tracked metric, in cache-build order.
    pub const ALL: [Self; 8] = [
        Self::HouseholdIncome,
        Self::PovertyRate,
        Self::HomePrice,
        Self::DiversityIndex,
        Self::DisposableIncome,
        Self::TrailMiles,
        Self::ParkAcres,
        Self::ProtectedLand,
    ];

    /// Extract this metric's value from a city record, if present.
    ///
    /// Scorers use the same extraction the cache builder uses, so a
    /// city's own value and the distribution it is ranked against can
    /// never disagree.
    #[must_use]
    pub fn extract(self, city: &CityMetrics) -> Option<f64> {
        match self {
            Self::HouseholdIncome => city.demographics.as_ref()?.median_household_income,
            Self::PovertyRate => city.demographics.as_ref()?.poverty_rate,
            Self::HomePrice => city.cost.as_ref()?.median_home_price,
            Self::DiversityIndex => city.demographics.as_ref()?.diversity_index(),
            Self::DisposableIncome => city.disposable_income(),
            Self::TrailMiles => city.quality_of_life.as_ref()?.trail_miles,
            Self::ParkAcres => city.quality_of_life.as_ref()?.park_acres_per_10k,
            Self::ProtectedLand => city.quality_of_life.as_ref()?.protected_land_percent,
        }
    }
}

/// Sorted per-metric value arrays for one scoring run.
///
/// # Examples
/// ```
/// use cityfit_core::{CityMetrics, PercentileCache, PercentileMetric};
///
/// let cities = vec![CityMetrics::new(1, "A"), CityMetrics::new(2, "B")];
/// let cache = PercentileCache::from_cities(&cities);
/// assert!(cache.values(PercentileMetric::HouseholdIncome).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PercentileCache {
    values: BTreeMap<PercentileMetric, Vec<f64>>,
}

impl PercentileCache {
    /// Build the cache by scanning the full city set once.
    ///
    /// Non-finite values are discarded; each metric's array is sorted
    /// ascending for binary-search ranking.
    #[must_use]
    pub fn from_cities(cities: &[CityMetrics]) -> Self {
        let mut values = BTreeMap::new();
        for metric in PercentileMetric::ALL {
            let mut collected: Vec<f64> = cities
                .iter()
                .filter_map(|city| metric.extract(city))
                .filter(|value| value.is_finite())
                .collect();
            collected.sort_by(f64::total_cmp);
            values.insert(metric, collected);
        }
        debug!(
            "percentile cache built for {} cities ({} metrics)",
            cities.len(),
            PercentileMetric::ALL.len()
        );
        Self { values }
    }

    /// The sorted distribution for one metric; empty when no city
    /// reported it.
    #[must_use]
    pub fn values(&self, metric: PercentileMetric) -> &[f64] {
        self.values.get(&metric).map_or(&[], Vec::as_slice)
    }
}
