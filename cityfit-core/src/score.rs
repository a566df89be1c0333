//! Output records produced by a scoring run.

use serde::{Deserialize, Serialize};

use crate::Category;

/// The neutral score signalling "no opinion", distinct from a poor score.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Why a city was pushed to the bottom of the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExclusionReason {
    /// The record carried no metric sub-records at all.
    NoData,
}

impl std::fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoData => f.write_str("no metric data"),
        }
    }
}

/// One score per category, each in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    /// Climate score.
    pub climate: f64,
    /// Cost score.
    pub cost: f64,
    /// Demographics score.
    pub demographics: f64,
    /// Quality-of-life score.
    pub quality_of_life: f64,
    /// Values score.
    pub values: f64,
    /// Entertainment score.
    pub entertainment: f64,
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self::neutral()
    }
}

impl CategoryScores {
    /// All categories at the neutral score.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            climate: NEUTRAL_SCORE,
            cost: NEUTRAL_SCORE,
            demographics: NEUTRAL_SCORE,
            quality_of_life: NEUTRAL_SCORE,
            values: NEUTRAL_SCORE,
            entertainment: NEUTRAL_SCORE,
        }
    }

    /// Return the score for one category.
    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        match category {
            Category::Climate => self.climate,
            Category::Cost => self.cost,
            Category::Demographics => self.demographics,
            Category::QualityOfLife => self.quality_of_life,
            Category::Values => self.values,
            Category::Entertainment => self.entertainment,
        }
    }

    /// Set the score for one category.
    pub const fn set(&mut self, category: Category, score: f64) {
        match category {
            Category::Climate => self.climate = score,
            Category::Cost => self.cost = score,
            Category::Demographics => self.demographics = score,
            Category::QualityOfLife => self.quality_of_life = score,
            Category::Values => self.values = score,
            Category::Entertainment => self.entertainment = score,
        }
    }
}

/// The scored result for one city.
///
/// Every score lies in `0.0..=100.0`. A composite weight-sum of zero
/// yields `total_score == 0.0` with `excluded` unset: the row sinks
/// numerically but is not flagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityScore {
    /// Stable city identifier from the input record.
    pub city_id: u64,
    /// Display name from the input record.
    pub name: String,
    /// The six category scores.
    pub categories: CategoryScores,
    /// Weighted mean of the category scores under the user's category
    /// weights; `0.0` when every weight is zero.
    pub total_score: f64,
    /// Set when the city was pushed to the bottom rather than scored.
    #[serde(default)]
    pub excluded: Option<ExclusionReason>,
}

/// The ranked output of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Scores sorted descending by total, excluded entries last.
    pub scores: Vec<CityScore>,
    /// Count of cities that were scored.
    pub included: usize,
    /// Count of cities that were excluded.
    pub excluded: usize,
}
