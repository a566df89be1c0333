//! Scoring categories covered by the engine.
//!
//! The enum offers compile-time safety for weight lookups.
//!
//! # Examples
//! ```
//! use cityfit_core::Category;
//!
//! assert_eq!(Category::Climate.as_str(), "climate");
//! assert_eq!(Category::QualityOfLife.to_string(), "quality-of-life");
//! ```

use serde::{Deserialize, Serialize};

/// One of the six scoring categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Weather comfort and seasonal character.
    Climate,
    /// Cost of living and purchasing power.
    Cost,
    /// Population makeup and community fit.
    Demographics,
    /// Walkability, safety, and local services.
    QualityOfLife,
    /// Political and religious alignment.
    Values,
    /// Nightlife, arts, dining, sports, and recreation.
    Entertainment,
}

impl Category {
    /// All categories in scoring order.
    pub const ALL: [Self; 6] = [
        Self::Climate,
        Self::Cost,
        Self::Demographics,
        Self::QualityOfLife,
        Self::Values,
        Self::Entertainment,
    ];

    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use cityfit_core::Category;
    ///
    /// assert_eq!(Category::Values.as_str(), "values");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Climate => "climate",
            Self::Cost => "cost",
            Self::Demographics => "demographics",
            Self::QualityOfLife => "quality-of-life",
            Self::Values => "values",
            Self::Entertainment => "entertainment",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "climate" => Ok(Self::Climate),
            "cost" => Ok(Self::Cost),
            "demographics" => Ok(Self::Demographics),
            "quality-of-life" => Ok(Self::QualityOfLife),
            "values" => Ok(Self::Values),
            "entertainment" => Ok(Self::Entertainment),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Category::Cost.to_string(), Category::Cost.as_str());
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Category::from_str("weather").unwrap_err();
        assert!(err.contains("unknown category"));
    }

    #[test]
    fn all_covers_each_variant_once() {
        let mut seen = std::collections::BTreeSet::new();
        for category in Category::ALL {
            assert!(seen.insert(category));
        }
        assert_eq!(seen.len(), 6);
    }
}
