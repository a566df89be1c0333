//! User preference configuration: six category weights plus per-category
//! advanced blocks of sub-weights and thresholds.
//!
//! Weights are on the 0-100 scale, independent, and not required to sum
//! to 100. Setters clamp into range; the `try_*` constructors reject
//! non-finite values as programmer errors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Category, MinorityGroup};

/// Default weight applied to every category and sub-metric.
pub const DEFAULT_WEIGHT: f64 = 50.0;

/// Errors returned by the validating preference constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// A weight was NaN or infinite.
    #[error("preference weights must be finite")]
    NonFiniteWeight,
}

/// Stated political preference, mapped to a target partisan index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoliticalLean {
    /// Strongly Democratic; target index -0.7.
    StrongDem,
    /// Lean Democratic; target index -0.25.
    LeanDem,
    /// Prefer competitive places; distance is measured from 0.
    Swing,
    /// Lean Republican; target index +0.25.
    LeanRep,
    /// Strongly Republican; target index +0.7.
    StrongRep,
    /// No stated preference; the political sub-metric is dropped.
    #[default]
    Neutral,
}

impl PoliticalLean {
    /// Target partisan index for the stated lean.
    ///
    /// Returns `None` for [`PoliticalLean::Neutral`], which removes the
    /// political sub-metric from scoring entirely.
    #[must_use]
    pub const fn target_index(self) -> Option<f64> {
        match self {
            Self::StrongDem => Some(-0.7),
            Self::LeanDem => Some(-0.25),
            Self::Swing => Some(0.0),
            Self::LeanRep => Some(0.25),
            Self::StrongRep => Some(0.7),
            Self::Neutral => None,
        }
    }
}

/// Housing situation used by the purchasing-power collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HousingPersona {
    /// Renting at the median gross rent.
    #[default]
    Renter,
    /// Owning outright; exposure is taxes and upkeep.
    Homeowner,
    /// Shopping for a home at the median sale price.
    ProspectiveBuyer,
}

/// Income situation used by the purchasing-power collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkPersona {
    /// Median-income wage earner.
    #[default]
    Standard,
    /// Top-bracket earner; marginal tax rates dominate.
    HighEarner,
    /// Fixed retirement income; retirement-tax treatment dominates.
    Retiree,
}

/// Desired age character of a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeMix {
    /// Skews 20-34.
    Young,
    /// Balanced across bands.
    #[default]
    Mixed,
    /// Skews 55 and over.
    Mature,
}

/// Which gender the dating sub-score optimises the pool for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Seeking {
    /// More men per 100 women is favourable.
    Men,
    /// Fewer men per 100 women is favourable.
    Women,
}

/// Age band used for the gender-ratio lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeBand {
    /// Ages 18-29.
    #[default]
    Age18To29,
    /// Ages 30-44.
    Age30To44,
    /// Ages 45-64.
    Age45To64,
}

/// Minority-community presence preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinorityPreference {
    /// Top-level group the user wants present.
    pub group: MinorityGroup,
    /// Specific subgroup slug, when the user narrows the group
    /// (for example `"mexican"` within Hispanic).
    #[serde(default)]
    pub subgroup: Option<String>,
    /// Minimum acceptable share, percent.
    pub min_percent: f64,
    /// Importance of this preference, 0-100.
    pub importance: f64,
}

/// Dating-favorability blend configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatingPreferences {
    /// Share of the demographics score taken by dating favorability,
    /// 0-100. Zero disables the blend.
    pub blend_percent: f64,
    /// Which gender the pool is scored for; `None` keeps the gender-ratio
    /// sub-metric out of the pool.
    pub seeking: Option<Seeking>,
    /// Age band for the gender-ratio lookup.
    pub age_band: AgeBand,
}

impl Default for DatingPreferences {
    fn default() -> Self {
        Self {
            blend_percent: 0.0,
            seeking: None,
            age_band: AgeBand::default(),
        }
    }
}

/// Per-metric climate sub-weights, 0-100 each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimatePreferences {
    /// Weight for comfortable days.
    pub comfort_weight: f64,
    /// Weight for extreme-heat days.
    pub extreme_heat_weight: f64,
    /// Weight for freeze days.
    pub freeze_weight: f64,
    /// Weight for rain days.
    pub rain_weight: f64,
    /// Weight for snow days.
    pub snow_weight: f64,
    /// Weight for cloudy days.
    pub cloud_weight: f64,
    /// Weight for July dew point.
    pub dewpoint_weight: f64,
    /// Weight for total degree-days.
    pub degree_day_weight: f64,
    /// Weight for growing-season length.
    pub growing_season_weight: f64,
    /// Weight for seasonal temperature stability.
    pub stability_weight: f64,
    /// Weight for diurnal swing.
    pub diurnal_weight: f64,
}

impl Default for ClimatePreferences {
    fn default() -> Self {
        Self {
            comfort_weight: DEFAULT_WEIGHT,
            extreme_heat_weight: DEFAULT_WEIGHT,
            freeze_weight: DEFAULT_WEIGHT,
            rain_weight: DEFAULT_WEIGHT,
            snow_weight: DEFAULT_WEIGHT,
            cloud_weight: DEFAULT_WEIGHT,
            dewpoint_weight: DEFAULT_WEIGHT,
            degree_day_weight: DEFAULT_WEIGHT,
            growing_season_weight: DEFAULT_WEIGHT,
            stability_weight: DEFAULT_WEIGHT,
            diurnal_weight: DEFAULT_WEIGHT,
        }
    }
}

/// Cost personas fed to the purchasing-power collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CostPreferences {
    /// Housing persona.
    pub housing: HousingPersona,
    /// Work persona.
    pub work: WorkPersona,
}

/// Demographics sub-weights and thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicPreferences {
    /// Weight for the diversity sub-metric.
    pub diversity_weight: f64,
    /// Weight for the age-mix fit sub-metric.
    pub age_fit_weight: f64,
    /// Weight for educational attainment.
    pub education_weight: f64,
    /// Weight for foreign-born share.
    pub foreign_born_weight: f64,
    /// Weight for economic health (income and poverty).
    pub economic_weight: f64,
    /// Desired age character.
    pub age_mix: AgeMix,
    /// Minority-presence preference, when stated.
    pub minority: Option<MinorityPreference>,
    /// Soft population floor; shortfall is penalised, not filtered.
    pub min_population: Option<f64>,
    /// Dating-favorability blend.
    pub dating: DatingPreferences,
}

impl Default for DemographicPreferences {
    fn default() -> Self {
        Self {
            diversity_weight: DEFAULT_WEIGHT,
            age_fit_weight: DEFAULT_WEIGHT,
            education_weight: DEFAULT_WEIGHT,
            foreign_born_weight: DEFAULT_WEIGHT,
            economic_weight: DEFAULT_WEIGHT,
            age_mix: AgeMix::default(),
            minority: None,
            min_population: None,
            dating: DatingPreferences::default(),
        }
    }
}

/// Quality-of-life sub-weights and thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityOfLifePreferences {
    /// Weight for walkability.
    pub walkability_weight: f64,
    /// Weight for safety.
    pub safety_weight: f64,
    /// Weight for air quality.
    pub air_quality_weight: f64,
    /// Weight for broadband.
    pub broadband_weight: f64,
    /// Weight for schools.
    pub education_weight: f64,
    /// Weight for healthcare access.
    pub healthcare_weight: f64,
    /// Minimum acceptable Walk Score; below it the walkability sub-score
    /// scales down proportionally (soft threshold).
    pub min_walk_score: Option<f64>,
}

impl Default for QualityOfLifePreferences {
    fn default() -> Self {
        Self {
            walkability_weight: DEFAULT_WEIGHT,
            safety_weight: DEFAULT_WEIGHT,
            air_quality_weight: DEFAULT_WEIGHT,
            broadband_weight: DEFAULT_WEIGHT,
            education_weight: DEFAULT_WEIGHT,
            healthcare_weight: DEFAULT_WEIGHT,
            min_walk_score: None,
        }
    }
}

/// Values sub-weights: politics and religion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuesPreferences {
    /// Stated political lean.
    pub political_lean: PoliticalLean,
    /// Importance of political alignment, 0-100. Above 70 a severe
    /// mismatch triggers the dealbreaker penalty on the whole category.
    pub political_weight: f64,
    /// Tradition slug whose local presence matters, when stated.
    pub religion: Option<String>,
    /// Weight for the religious-presence sub-metric.
    pub religion_weight: f64,
    /// Weight for the religious-diversity sub-metric.
    pub religious_diversity_weight: f64,
}

impl Default for ValuesPreferences {
    fn default() -> Self {
        Self {
            political_lean: PoliticalLean::default(),
            political_weight: DEFAULT_WEIGHT,
            religion: None,
            religion_weight: DEFAULT_WEIGHT,
            religious_diversity_weight: DEFAULT_WEIGHT,
        }
    }
}

/// Entertainment sub-weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntertainmentPreferences {
    /// Weight for nightlife density.
    pub nightlife_weight: f64,
    /// Weight for museums and galleries.
    pub arts_weight: f64,
    /// Weight for dining density.
    pub dining_weight: f64,
    /// Weight for professional sports.
    pub sports_weight: f64,
    /// Weight for trails, parks, and protected land.
    pub nature_weight: f64,
    /// Weight for beach access.
    pub beach_weight: f64,
    /// Weight for mountains and skiing.
    pub mountain_weight: f64,
}

impl Default for EntertainmentPreferences {
    fn default() -> Self {
        Self {
            nightlife_weight: DEFAULT_WEIGHT,
            arts_weight: DEFAULT_WEIGHT,
            dining_weight: DEFAULT_WEIGHT,
            sports_weight: DEFAULT_WEIGHT,
            nature_weight: DEFAULT_WEIGHT,
            beach_weight: DEFAULT_WEIGHT,
            mountain_weight: DEFAULT_WEIGHT,
        }
    }
}

/// The complete preference record for one scoring run.
///
/// # Examples
/// ```
/// use cityfit_core::{Category, UserPreferences};
///
/// let prefs = UserPreferences::default().with_weight(Category::Climate, 80.0);
/// assert_eq!(prefs.weight(Category::Climate), 80.0);
/// assert_eq!(prefs.weight(Category::Cost), 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    weights: BTreeMap<Category, f64>,
    /// Climate advanced block.
    pub climate: ClimatePreferences,
    /// Cost advanced block.
    pub cost: CostPreferences,
    /// Demographics advanced block.
    pub demographics: DemographicPreferences,
    /// Quality-of-life advanced block.
    pub quality_of_life: QualityOfLifePreferences,
    /// Values advanced block.
    pub values: ValuesPreferences,
    /// Entertainment advanced block.
    pub entertainment: EntertainmentPreferences,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            weights: Category::ALL
                .into_iter()
                .map(|category| (category, DEFAULT_WEIGHT))
                .collect(),
            climate: ClimatePreferences::default(),
            cost: CostPreferences::default(),
            demographics: DemographicPreferences::default(),
            quality_of_life: QualityOfLifePreferences::default(),
            values: ValuesPreferences::default(),
            entertainment: EntertainmentPreferences::default(),
        }
    }
}

impl UserPreferences {
    /// Return the weight for a category; unset categories read as the
    /// default 50.
    #[must_use]
    pub fn weight(&self, category: Category) -> f64 {
        self.weights.get(&category).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// Insert or update a category weight.
    ///
    /// Values are clamped into `0.0..=100.0`; NaN clamps to the lower
    /// bound. Use [`UserPreferences::try_set_weight`] to reject
    /// non-finite input instead.
    pub fn set_weight(&mut self, category: Category, weight: f64) {
        let clamped = if weight.is_finite() {
            weight.clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.weights.insert(category, clamped);
    }

    /// Insert or update a category weight, rejecting non-finite values.
    ///
    /// # Errors
    /// Returns [`PreferenceError::NonFiniteWeight`] when `weight` is NaN
    /// or infinite.
    pub fn try_set_weight(
        &mut self,
        category: Category,
        weight: f64,
    ) -> Result<(), PreferenceError> {
        if !weight.is_finite() {
            return Err(PreferenceError::NonFiniteWeight);
        }
        self.set_weight(category, weight);
        Ok(())
    }

    /// Set a category weight while returning `self` for chaining.
    #[must_use]
    pub fn with_weight(mut self, category: Category, weight: f64) -> Self {
        self.set_weight(category, weight);
        self
    }

    /// Set every category weight to the same value.
    pub fn set_all_weights(&mut self, weight: f64) {
        for category in Category::ALL {
            self.set_weight(category, weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_weight_every_category_equally() {
        let prefs = UserPreferences::default();
        for category in Category::ALL {
            assert_eq!(prefs.weight(category), DEFAULT_WEIGHT);
        }
    }

    #[rstest]
    #[case(120.0, 100.0)]
    #[case(-3.0, 0.0)]
    #[case(64.0, 64.0)]
    fn set_weight_clamps(#[case] input: f64, #[case] expected: f64) {
        let mut prefs = UserPreferences::default();
        prefs.set_weight(Category::Values, input);
        assert_eq!(prefs.weight(Category::Values), expected);
    }

    #[rstest]
    fn try_set_weight_rejects_nan() {
        let mut prefs = UserPreferences::default();
        let err = prefs
            .try_set_weight(Category::Cost, f64::NAN)
            .expect_err("NaN must be rejected");
        assert_eq!(err, PreferenceError::NonFiniteWeight);
    }

    #[rstest]
    fn neutral_lean_has_no_target() {
        assert!(PoliticalLean::Neutral.target_index().is_none());
        assert_eq!(PoliticalLean::Swing.target_index(), Some(0.0));
    }

    #[rstest]
    fn preferences_deserialize_with_defaults() {
        let prefs: UserPreferences = serde_json::from_str("{}").expect("empty object");
        assert_eq!(prefs.weight(Category::Entertainment), DEFAULT_WEIGHT);
        assert_eq!(prefs.demographics.dating.blend_percent, 0.0);
    }
}
