//! Read-only per-city metric records supplied by upstream collaborators.
//!
//! Every leaf value is optional: the ingestion jobs populate what they can
//! and the engine degrades the rest to a neutral contribution. Percentages
//! are on the 0-100 scale, rates are per-100k or percent as documented per
//! field, and the partisan index is `-1.0..=1.0`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A major-league sport whose franchises count towards the sports score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum League {
    /// National Football League.
    Nfl,
    /// National Basketball Association.
    Nba,
    /// Major League Baseball.
    Mlb,
    /// National Hockey League.
    Nhl,
    /// Major League Soccer.
    Mls,
}

/// Climate statistics for one city.
///
/// Day counts are annual averages; temperatures are Fahrenheit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateMetrics {
    /// Days per year in the comfortable temperature band.
    pub comfort_days: Option<f64>,
    /// Days per year at or above 95F.
    pub extreme_heat_days: Option<f64>,
    /// Days per year at or below freezing.
    pub freeze_days: Option<f64>,
    /// Days per year with measurable rain.
    pub rain_days: Option<f64>,
    /// Days per year with measurable snow.
    pub snow_days: Option<f64>,
    /// Days per year with majority cloud cover.
    pub cloudy_days: Option<f64>,
    /// Mean July dew point, Fahrenheit.
    pub july_dewpoint_f: Option<f64>,
    /// Annual heating plus cooling degree-days.
    pub total_degree_days: Option<f64>,
    /// Length of the growing season in days.
    pub growing_season_days: Option<f64>,
    /// Standard deviation of monthly mean temperatures.
    pub seasonal_temp_stddev: Option<f64>,
    /// Mean daily temperature swing, Fahrenheit.
    pub diurnal_swing_f: Option<f64>,
}

/// Cost-of-living statistics for one city.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CostMetrics {
    /// Regional price parity, all items (100 = national average).
    pub rpp_all_items: Option<f64>,
    /// Regional price parity, goods component.
    pub rpp_goods: Option<f64>,
    /// Regional price parity, housing (rents) component.
    pub rpp_housing: Option<f64>,
    /// Median home sale price, dollars.
    pub median_home_price: Option<f64>,
    /// Median gross monthly rent, dollars.
    pub median_gross_rent: Option<f64>,
    /// Effective property tax rate, percent of assessed value.
    pub property_tax_rate: Option<f64>,
    /// Combined state and local sales tax rate, percent.
    pub sales_tax_rate: Option<f64>,
}

/// Population and community statistics for one city.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicMetrics {
    /// Total population.
    pub population: Option<f64>,
    /// Median age in years.
    pub median_age: Option<f64>,
    /// Share of residents aged 20-34, percent.
    pub pct_age_20_34: Option<f64>,
    /// Share of residents aged 35-54, percent.
    pub pct_age_35_54: Option<f64>,
    /// Share of residents aged 55 and over, percent.
    pub pct_age_55_plus: Option<f64>,
    /// Non-Hispanic white share, percent.
    pub white_percent: Option<f64>,
    /// Black or African American share, percent.
    pub black_percent: Option<f64>,
    /// Hispanic or Latino share, percent.
    pub hispanic_percent: Option<f64>,
    /// Asian share, percent.
    pub asian_percent: Option<f64>,
    /// American Indian and Alaska Native share, percent.
    pub native_percent: Option<f64>,
    /// Native Hawaiian and Pacific Islander share, percent.
    pub pacific_percent: Option<f64>,
    /// Two-or-more-races share, percent.
    pub multiracial_percent: Option<f64>,
    /// Named subgroup shares, percent, keyed by subgroup slug
    /// (for example `"mexican"`, `"cuban"`, `"chinese"`, `"indian"`).
    pub subgroup_percents: BTreeMap<String, f64>,
    /// Men per 100 women, ages 18-29.
    pub men_per_100_women_18_29: Option<f64>,
    /// Men per 100 women, ages 30-44.
    pub men_per_100_women_30_44: Option<f64>,
    /// Men per 100 women, ages 45-64.
    pub men_per_100_women_45_64: Option<f64>,
    /// Never-married share of adults, percent.
    pub never_married_percent: Option<f64>,
    /// Median household income, dollars.
    pub median_household_income: Option<f64>,
    /// Share of residents below the poverty line, percent.
    pub poverty_rate: Option<f64>,
    /// Share of adults holding a bachelor's degree or higher, percent.
    pub bachelors_percent: Option<f64>,
    /// Share of adults holding a graduate degree, percent.
    pub graduate_percent: Option<f64>,
    /// Foreign-born share, percent.
    pub foreign_born_percent: Option<f64>,
    /// Share of households speaking a language other than English, percent.
    pub non_english_at_home_percent: Option<f64>,
}

/// Quality-of-life statistics for one city.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityOfLifeMetrics {
    /// Walk Score, 0-100.
    pub walk_score: Option<f64>,
    /// Transit Score, 0-100.
    pub transit_score: Option<f64>,
    /// Violent crimes per 100k residents per year.
    pub violent_crime_rate: Option<f64>,
    /// Three-year violent-crime trend, signed percent change.
    pub crime_trend_3yr_percent: Option<f64>,
    /// Share of days with good air quality, percent.
    pub air_quality_good_percent: Option<f64>,
    /// Share of addresses with fiber broadband available, percent.
    pub fiber_coverage_percent: Option<f64>,
    /// Count of wired broadband providers serving the city.
    pub broadband_providers: Option<u32>,
    /// Public-school student/teacher ratio.
    pub student_teacher_ratio: Option<f64>,
    /// High-school graduation rate, percent.
    pub graduation_rate_percent: Option<f64>,
    /// Active physicians per 100k residents.
    pub physicians_per_100k: Option<f64>,
    /// Health Professional Shortage Area score; higher is worse.
    pub hpsa_score: Option<f64>,
    /// Maintained trail miles within the metro.
    pub trail_miles: Option<f64>,
    /// Park acres per 10k residents.
    pub park_acres_per_10k: Option<f64>,
    /// Share of surrounding land under protection, percent.
    pub protected_land_percent: Option<f64>,
    /// Road miles to the nearest swimmable beach.
    pub nearest_beach_miles: Option<f64>,
    /// Elevation range within 30 miles, feet.
    pub elevation_range_ft: Option<f64>,
    /// Road miles to the nearest ski area.
    pub nearest_ski_miles: Option<f64>,
}

/// Political, religious, and urban-lifestyle statistics for one city.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CulturalMetrics {
    /// Continuous political-lean scalar, -1.0 (strongly Democratic) to
    /// +1.0 (strongly Republican).
    pub partisan_index: Option<f64>,
    /// Voter turnout in the most recent general election, percent.
    pub voter_turnout_percent: Option<f64>,
    /// Religious adherents per 1000 residents, keyed by tradition slug
    /// (for example `"catholic"`, `"evangelical"`, `"jewish"`).
    pub adherents_per_1000: BTreeMap<String, f64>,
    /// Bars and clubs per 10k residents.
    pub bars_per_10k: Option<f64>,
    /// Restaurants per 10k residents.
    pub restaurants_per_10k: Option<f64>,
    /// Museums and galleries, absolute count.
    pub museums_count: Option<f64>,
    /// Major-league franchises by league.
    pub team_counts: BTreeMap<League, u32>,
}

/// Minority groups addressable by the community-presence preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinorityGroup {
    /// Non-Hispanic white residents.
    White,
    /// Black or African American residents.
    Black,
    /// Hispanic or Latino residents.
    Hispanic,
    /// Asian residents.
    Asian,
    /// American Indian and Alaska Native residents.
    Native,
    /// Native Hawaiian and Pacific Islander residents.
    Pacific,
    /// Residents of two or more races.
    Multiracial,
}

impl DemographicMetrics {
    /// Return the share for a top-level group, if reported.
    #[must_use]
    pub const fn group_percent(&self, group: MinorityGroup) -> Option<f64> {
        match group {
            MinorityGroup::White => self.white_percent,
            MinorityGroup::Black => self.black_percent,
            MinorityGroup::Hispanic => self.hispanic_percent,
            MinorityGroup::Asian => self.asian_percent,
            MinorityGroup::Native => self.native_percent,
            MinorityGroup::Pacific => self.pacific_percent,
            MinorityGroup::Multiracial => self.multiracial_percent,
        }
    }

    /// Return the share for a subgroup, falling back to its parent group.
    ///
    /// Subgroup statistics (for example Mexican within Hispanic, Chinese
    /// within Asian) are sparser than the parent series, so a missing
    /// subgroup entry falls back to the parent share rather than dropping
    /// the sub-metric.
    ///
    /// # Examples
    /// ```
    /// use cityfit_core::{DemographicMetrics, MinorityGroup};
    ///
    /// let mut demographics = DemographicMetrics::default();
    /// demographics.asian_percent = Some(12.0);
    /// demographics
    ///     .subgroup_percents
    ///     .insert("chinese".to_owned(), 4.5);
    ///
    /// let chinese = demographics.minority_share(MinorityGroup::Asian, Some("chinese"));
    /// assert_eq!(chinese, Some(4.5));
    /// let indian = demographics.minority_share(MinorityGroup::Asian, Some("indian"));
    /// assert_eq!(indian, Some(12.0));
    /// ```
    #[must_use]
    pub fn minority_share(&self, group: MinorityGroup, subgroup: Option<&str>) -> Option<f64> {
        subgroup
            .and_then(|name| self.subgroup_percents.get(name).copied())
            .or_else(|| self.group_percent(group))
    }

    /// Simpson diversity index over the reported race/ethnicity shares.
    ///
    /// Returns `None` when no share is reported. The value lies in
    /// `0.0..=1.0`; higher means a more even mix.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "diversity index sums squared population shares"
    )]
    pub fn diversity_index(&self) -> Option<f64> {
        let shares: Vec<f64> = [
            self.white_percent,
            self.black_percent,
            self.hispanic_percent,
            self.asian_percent,
            self.native_percent,
            self.pacific_percent,
            self.multiracial_percent,
        ]
        .into_iter()
        .flatten()
        .filter(|share| share.is_finite() && *share >= 0.0)
        .collect();
        if shares.is_empty() {
            return None;
        }
        let sum_of_squares: f64 = shares
            .iter()
            .map(|share| (share / 100.0) * (share / 100.0))
            .sum();
        Some((1.0 - sum_of_squares).clamp(0.0, 1.0))
    }

    /// Men per 100 women for one dating age band, if reported.
    #[must_use]
    pub const fn gender_ratio(&self, band: crate::AgeBand) -> Option<f64> {
        match band {
            crate::AgeBand::Age18To29 => self.men_per_100_women_18_29,
            crate::AgeBand::Age30To44 => self.men_per_100_women_30_44,
            crate::AgeBand::Age45To64 => self.men_per_100_women_45_64,
        }
    }
}

impl CulturalMetrics {
    /// Total major-league franchises across all leagues.
    #[must_use]
    pub fn total_teams(&self) -> u32 {
        self.team_counts.values().copied().sum()
    }

    /// Number of distinct leagues with at least one franchise.
    #[must_use]
    pub fn leagues_spanned(&self) -> usize {
        self.team_counts.values().filter(|count| **count > 0).count()
    }

    /// Simpson diversity index over religious-tradition adherence.
    ///
    /// Returns `None` when no tradition is reported or total adherence is
    /// zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "diversity index sums squared adherence shares"
    )]
    pub fn religious_diversity_index(&self) -> Option<f64> {
        let total: f64 = self
            .adherents_per_1000
            .values()
            .filter(|rate| rate.is_finite() && **rate > 0.0)
            .sum();
        if total <= 0.0 {
            return None;
        }
        let sum_of_squares: f64 = self
            .adherents_per_1000
            .values()
            .filter(|rate| rate.is_finite() && **rate > 0.0)
            .map(|rate| (rate / total) * (rate / total))
            .sum();
        Some((1.0 - sum_of_squares).clamp(0.0, 1.0))
    }
}

/// The full read-only metrics record for one city.
///
/// Sub-records are independently optional; a city with no sub-records at
/// all is excluded from ranking rather than scored.
///
/// # Examples
/// ```
/// use cityfit_core::{CityMetrics, ClimateMetrics};
///
/// let city = CityMetrics {
///     climate: Some(ClimateMetrics {
///         comfort_days: Some(254.0),
///         ..ClimateMetrics::default()
///     }),
///     ..CityMetrics::new(1, "Santa Barbara")
/// };
/// assert!(city.has_any_data());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityMetrics {
    /// Stable city identifier assigned upstream.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Two-letter state code, when known.
    #[serde(default)]
    pub state: Option<String>,
    /// Climate sub-record.
    #[serde(default)]
    pub climate: Option<ClimateMetrics>,
    /// Cost-of-living sub-record.
    #[serde(default)]
    pub cost: Option<CostMetrics>,
    /// Demographics sub-record.
    #[serde(default)]
    pub demographics: Option<DemographicMetrics>,
    /// Quality-of-life sub-record.
    #[serde(default)]
    pub quality_of_life: Option<QualityOfLifeMetrics>,
    /// Cultural sub-record.
    #[serde(default)]
    pub cultural: Option<CulturalMetrics>,
}

impl CityMetrics {
    /// Construct an empty record with an identifier and name.
    #[must_use]
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            state: None,
            climate: None,
            cost: None,
            demographics: None,
            quality_of_life: None,
            cultural: None,
        }
    }

    /// Report whether any metric sub-record is present.
    #[must_use]
    pub const fn has_any_data(&self) -> bool {
        self.climate.is_some()
            || self.cost.is_some()
            || self.demographics.is_some()
            || self.quality_of_life.is_some()
            || self.cultural.is_some()
    }

    /// Estimated monthly-income surplus after rent, annualised.
    ///
    /// Requires both the median household income and the median gross
    /// rent; returns `None` when either is missing.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "disposable income subtracts annualised rent from income"
    )]
    pub fn disposable_income(&self) -> Option<f64> {
        let income = self.demographics.as_ref()?.median_household_income?;
        let rent = self.cost.as_ref()?.median_gross_rent?;
        Some(income - 12.0 * rent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_record_has_no_data() {
        let city = CityMetrics::new(7, "Nowhere");
        assert!(!city.has_any_data());
    }

    #[rstest]
    fn diversity_index_requires_some_share() {
        let demographics = DemographicMetrics::default();
        assert!(demographics.diversity_index().is_none());
    }

    #[rstest]
    fn diversity_index_rises_with_evenness() {
        let uniform = DemographicMetrics {
            white_percent: Some(25.0),
            black_percent: Some(25.0),
            hispanic_percent: Some(25.0),
            asian_percent: Some(25.0),
            ..DemographicMetrics::default()
        };
        let skewed = DemographicMetrics {
            white_percent: Some(85.0),
            black_percent: Some(5.0),
            hispanic_percent: Some(5.0),
            asian_percent: Some(5.0),
            ..DemographicMetrics::default()
        };
        let even = uniform.diversity_index().expect("shares present");
        let uneven = skewed.diversity_index().expect("shares present");
        assert!(even > uneven);
    }

    #[rstest]
    fn subgroup_lookup_falls_back_to_parent() {
        let demographics = DemographicMetrics {
            hispanic_percent: Some(30.0),
            ..DemographicMetrics::default()
        };
        assert_eq!(
            demographics.minority_share(MinorityGroup::Hispanic, Some("cuban")),
            Some(30.0)
        );
    }

    #[rstest]
    fn team_totals_span_leagues() {
        let cultural = CulturalMetrics {
            team_counts: BTreeMap::from([(League::Nfl, 1), (League::Nba, 2), (League::Mls, 0)]),
            ..CulturalMetrics::default()
        };
        assert_eq!(cultural.total_teams(), 3);
        assert_eq!(cultural.leagues_spanned(), 2);
    }

    #[rstest]
    fn disposable_income_needs_rent_and_income() {
        let mut city = CityMetrics::new(1, "Testville");
        city.demographics = Some(DemographicMetrics {
            median_household_income: Some(60_000.0),
            ..DemographicMetrics::default()
        });
        assert!(city.disposable_income().is_none());
        city.cost = Some(CostMetrics {
            median_gross_rent: Some(1500.0),
            ..CostMetrics::default()
        });
        assert_eq!(city.disposable_income(), Some(42_000.0));
    }

    #[rstest]
    fn record_roundtrips_through_json() {
        let payload = r#"{
            "id": 42,
            "name": "Madison",
            "state": "WI",
            "climate": { "comfort_days": 120.0, "freeze_days": 110.0 }
        }"#;
        let city: CityMetrics = serde_json::from_str(payload).expect("valid payload");
        assert_eq!(city.id, 42);
        let climate = city.climate.as_ref().expect("climate present");
        assert_eq!(climate.comfort_days, Some(120.0));
        assert!(climate.rain_days.is_none());
    }
}
