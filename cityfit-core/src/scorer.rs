//! Score one category of a city record for a user's preferences.
//!
//! The `CategoryScorer` trait assigns a bounded score to one
//! [`CityMetrics`](crate::CityMetrics) record given a
//! [`UserPreferences`](crate::UserPreferences) record and the run's
//! [`PercentileCache`](crate::PercentileCache).

use crate::{Category, CityMetrics, NEUTRAL_SCORE, PercentileCache, UserPreferences};

/// Calculate one category score for a city.
///
/// The method is infallible; missing data must degrade to the neutral
/// score rather than erroring. Implementations must be thread-safe
/// (`Send + Sync`) so concurrent ranking requests can share scorers.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Normalise results to the range `0.0..=100.0`.
/// - Return [`NEUTRAL_SCORE`] when no sub-metric is both present in the
///   data and positively weighted by the user.
///
/// Use [`CategoryScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use cityfit_core::{
///     Category, CategoryScorer, CityMetrics, PercentileCache, UserPreferences,
/// };
///
/// struct NeutralScorer;
///
/// impl CategoryScorer for NeutralScorer {
///     fn category(&self) -> Category {
///         Category::Climate
///     }
///
///     fn score(
///         &self,
///         _city: &CityMetrics,
///         _prefs: &UserPreferences,
///         _cache: &PercentileCache,
///     ) -> f64 {
///         Self::sanitise(f64::NAN)
///     }
/// }
///
/// let city = CityMetrics::new(1, "Anywhere");
/// let cache = PercentileCache::from_cities(std::slice::from_ref(&city));
/// let score = NeutralScorer.score(&city, &UserPreferences::default(), &cache);
/// assert_eq!(score, 50.0);
/// ```
pub trait CategoryScorer: Send + Sync {
    /// The category this scorer produces.
    fn category(&self) -> Category;

    /// Return a score in `0.0..=100.0` for `city` according to `prefs`.
    fn score(&self, city: &CityMetrics, prefs: &UserPreferences, cache: &PercentileCache) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns [`NEUTRAL_SCORE`] for non-finite values and clamps to
    /// `0.0..=100.0`.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return NEUTRAL_SCORE;
        }
        score.clamp(0.0, 100.0)
    }
}
