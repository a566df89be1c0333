//! Test-only fixtures shared by unit and behaviour tests.

use std::collections::BTreeMap;

use crate::{
    CityMetrics, ClimateMetrics, CostMetrics, CulturalMetrics, DemographicMetrics, League,
    PurchasingPowerCalculator, PurchasingPowerInputs, QualityOfLifeMetrics,
};

/// Deterministic calculator pinning every city at national-average
/// purchasing power.
#[derive(Default, Debug, Copy, Clone)]
pub struct FlatParityCalculator;

impl PurchasingPowerCalculator for FlatParityCalculator {
    fn purchasing_power_index(&self, _inputs: &PurchasingPowerInputs<'_>) -> Option<f64> {
        Some(100.0)
    }
}

/// A fully populated mid-size city record.
///
/// Values are plausible rather than meaningful; tests override the
/// fields they exercise.
#[must_use]
pub fn sample_city(id: u64, name: &str) -> CityMetrics {
    CityMetrics {
        state: Some("OH".to_owned()),
        climate: Some(ClimateMetrics {
            comfort_days: Some(140.0),
            extreme_heat_days: Some(12.0),
            freeze_days: Some(95.0),
            rain_days: Some(125.0),
            snow_days: Some(22.0),
            cloudy_days: Some(160.0),
            july_dewpoint_f: Some(64.0),
            total_degree_days: Some(6200.0),
            growing_season_days: Some(185.0),
            seasonal_temp_stddev: Some(16.0),
            diurnal_swing_f: Some(19.0),
        }),
        cost: Some(CostMetrics {
            rpp_all_items: Some(93.0),
            rpp_goods: Some(96.0),
            rpp_housing: Some(82.0),
            median_home_price: Some(245_000.0),
            median_gross_rent: Some(1150.0),
            property_tax_rate: Some(1.5),
            sales_tax_rate: Some(7.2),
        }),
        demographics: Some(DemographicMetrics {
            population: Some(420_000.0),
            median_age: Some(35.5),
            pct_age_20_34: Some(24.0),
            pct_age_35_54: Some(25.0),
            pct_age_55_plus: Some(27.0),
            white_percent: Some(61.0),
            black_percent: Some(22.0),
            hispanic_percent: Some(7.0),
            asian_percent: Some(5.0),
            native_percent: Some(0.4),
            pacific_percent: Some(0.1),
            multiracial_percent: Some(4.5),
            subgroup_percents: BTreeMap::from([
                ("mexican".to_owned(), 3.2),
                ("indian".to_owned(), 1.8),
            ]),
            men_per_100_women_18_29: Some(102.0),
            men_per_100_women_30_44: Some(99.0),
            men_per_100_women_45_64: Some(95.0),
            never_married_percent: Some(38.0),
            median_household_income: Some(58_000.0),
            poverty_rate: Some(16.0),
            bachelors_percent: Some(34.0),
            graduate_percent: Some(13.0),
            foreign_born_percent: Some(9.0),
            non_english_at_home_percent: Some(12.0),
        }),
        quality_of_life: Some(QualityOfLifeMetrics {
            walk_score: Some(48.0),
            transit_score: Some(35.0),
            violent_crime_rate: Some(420.0),
            crime_trend_3yr_percent: Some(-4.0),
            air_quality_good_percent: Some(88.0),
            fiber_coverage_percent: Some(55.0),
            broadband_providers: Some(4),
            student_teacher_ratio: Some(17.0),
            graduation_rate_percent: Some(88.0),
            physicians_per_100k: Some(82.0),
            hpsa_score: Some(6.0),
            trail_miles: Some(120.0),
            park_acres_per_10k: Some(210.0),
            protected_land_percent: Some(9.0),
            nearest_beach_miles: Some(380.0),
            elevation_range_ft: Some(600.0),
            nearest_ski_miles: Some(150.0),
        }),
        cultural: Some(CulturalMetrics {
            partisan_index: Some(-0.2),
            voter_turnout_percent: Some(61.0),
            adherents_per_1000: BTreeMap::from([
                ("catholic".to_owned(), 180.0),
                ("evangelical".to_owned(), 140.0),
                ("mainline".to_owned(), 95.0),
                ("jewish".to_owned(), 8.0),
            ]),
            bars_per_10k: Some(3.1),
            restaurants_per_10k: Some(17.0),
            museums_count: Some(14.0),
            team_counts: BTreeMap::from([(League::Nfl, 1), (League::Mlb, 1)]),
        }),
        ..CityMetrics::new(id, name)
    }
}

/// A record with no metric sub-records; the engine must exclude it.
#[must_use]
pub fn empty_city(id: u64, name: &str) -> CityMetrics {
    CityMetrics::new(id, name)
}
