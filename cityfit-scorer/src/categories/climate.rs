//! Climate scoring over calibrated U.S. extremes.
//!
//! Every sub-metric has a known real-world range, so the category uses
//! fixed-range normalization throughout; climate scores never shift
//! with the comparison set.

use cityfit_core::{
    Category, CategoryScorer, CityMetrics, NEUTRAL_SCORE, PercentileCache, UserPreferences,
};

use crate::{Blend, range_score};

/// Calibrated U.S. extremes: `(min, max, invert)` per sub-metric.
const COMFORT_DAYS: (f64, f64, bool) = (0.0, 280.0, false);
const EXTREME_HEAT_DAYS: (f64, f64, bool) = (0.0, 90.0, true);
const FREEZE_DAYS: (f64, f64, bool) = (0.0, 160.0, true);
const RAIN_DAYS: (f64, f64, bool) = (30.0, 180.0, true);
const SNOW_DAYS: (f64, f64, bool) = (0.0, 65.0, true);
const CLOUDY_DAYS: (f64, f64, bool) = (50.0, 220.0, true);
const JULY_DEWPOINT: (f64, f64, bool) = (45.0, 75.0, true);
const TOTAL_DEGREE_DAYS: (f64, f64, bool) = (2000.0, 9000.0, true);
const GROWING_SEASON: (f64, f64, bool) = (120.0, 365.0, false);
const SEASONAL_STDDEV: (f64, f64, bool) = (5.0, 28.0, true);
const DIURNAL_SWING: (f64, f64, bool) = (10.0, 35.0, true);

fn ranged(value: Option<f64>, bounds: (f64, f64, bool)) -> Option<f64> {
    value.map(|v| range_score(v, bounds.0, bounds.1, bounds.2))
}

/// Scores weather comfort and seasonal character.
#[derive(Debug, Default, Copy, Clone)]
pub struct ClimateScorer;

impl CategoryScorer for ClimateScorer {
    fn category(&self) -> Category {
        Category::Climate
    }

    fn score(&self, city: &CityMetrics, prefs: &UserPreferences, _cache: &PercentileCache) -> f64 {
        let Some(climate) = city.climate.as_ref() else {
            return NEUTRAL_SCORE;
        };
        let weights = &prefs.climate;

        let mut blend = Blend::new();
        blend.add_maybe(ranged(climate.comfort_days, COMFORT_DAYS), weights.comfort_weight);
        blend.add_maybe(
            ranged(climate.extreme_heat_days, EXTREME_HEAT_DAYS),
            weights.extreme_heat_weight,
        );
        blend.add_maybe(ranged(climate.freeze_days, FREEZE_DAYS), weights.freeze_weight);
        blend.add_maybe(ranged(climate.rain_days, RAIN_DAYS), weights.rain_weight);
        blend.add_maybe(ranged(climate.snow_days, SNOW_DAYS), weights.snow_weight);
        blend.add_maybe(ranged(climate.cloudy_days, CLOUDY_DAYS), weights.cloud_weight);
        blend.add_maybe(
            ranged(climate.july_dewpoint_f, JULY_DEWPOINT),
            weights.dewpoint_weight,
        );
        blend.add_maybe(
            ranged(climate.total_degree_days, TOTAL_DEGREE_DAYS),
            weights.degree_day_weight,
        );
        blend.add_maybe(
            ranged(climate.growing_season_days, GROWING_SEASON),
            weights.growing_season_weight,
        );
        blend.add_maybe(
            ranged(climate.seasonal_temp_stddev, SEASONAL_STDDEV),
            weights.stability_weight,
        );
        blend.add_maybe(ranged(climate.diurnal_swing_f, DIURNAL_SWING), weights.diurnal_weight);

        Self::sanitise(blend.score_or_neutral())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityfit_core::ClimateMetrics;
    use rstest::rstest;

    fn city_with_climate(climate: ClimateMetrics) -> CityMetrics {
        CityMetrics {
            climate: Some(climate),
            ..CityMetrics::new(1, "climate-city")
        }
    }

    fn score(city: &CityMetrics, prefs: &UserPreferences) -> f64 {
        let cache = PercentileCache::from_cities(std::slice::from_ref(city));
        ClimateScorer.score(city, prefs, &cache)
    }

    #[rstest]
    fn mild_coastal_city_scores_high() {
        let city = city_with_climate(ClimateMetrics {
            comfort_days: Some(254.0),
            extreme_heat_days: Some(1.0),
            freeze_days: Some(0.0),
            ..ClimateMetrics::default()
        });
        assert!(score(&city, &UserPreferences::default()) > 85.0);
    }

    #[rstest]
    fn harsh_winter_city_lands_in_the_low_band() {
        let city = city_with_climate(ClimateMetrics {
            comfort_days: Some(84.0),
            freeze_days: Some(148.0),
            total_degree_days: Some(7403.0),
            ..ClimateMetrics::default()
        });
        let value = score(&city, &UserPreferences::default());
        assert!(value > 20.0 && value < 55.0, "got {value}");
    }

    #[rstest]
    fn missing_sub_record_is_neutral() {
        let city = CityMetrics::new(1, "no-climate");
        assert_eq!(score(&city, &UserPreferences::default()), NEUTRAL_SCORE);
    }

    #[rstest]
    fn zero_sub_weights_are_neutral() {
        let city = city_with_climate(ClimateMetrics {
            comfort_days: Some(254.0),
            ..ClimateMetrics::default()
        });
        let mut prefs = UserPreferences::default();
        // Comfort days is the only populated metric; zeroing its weight
        // leaves the blend empty.
        prefs.climate.comfort_weight = 0.0;
        assert_eq!(score(&city, &prefs), NEUTRAL_SCORE);
    }

    #[rstest]
    fn more_comfort_days_never_scores_lower() {
        let prefs = UserPreferences::default();
        let mut previous = 0.0;
        for comfort in [40.0, 90.0, 150.0, 210.0, 270.0] {
            let city = city_with_climate(ClimateMetrics {
                comfort_days: Some(comfort),
                freeze_days: Some(60.0),
                ..ClimateMetrics::default()
            });
            let value = score(&city, &prefs);
            assert!(value >= previous, "comfort {comfort} scored {value}");
            previous = value;
        }
    }
}
