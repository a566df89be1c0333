//! Weighted sub-score accumulation shared by every category scorer.

use cityfit_core::NEUTRAL_SCORE;

/// Accumulates `sum(score * weight)` over the sub-metrics that are both
/// present in the data and positively weighted by the user.
///
/// Missing data never zeroes a category: a sub-metric that cannot be
/// scored is simply not added, and a blend that accumulated no weight at
/// all resolves to the neutral 50 ("no opinion"), which is distinct from
/// a poor score.
///
/// # Examples
/// ```
/// use cityfit_scorer::Blend;
///
/// let mut blend = Blend::new();
/// blend.add(80.0, 60.0);
/// blend.add(20.0, 20.0);
/// blend.add_maybe(None, 100.0);
/// assert_eq!(blend.score_or_neutral(), 65.0);
///
/// assert_eq!(Blend::new().score_or_neutral(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Blend {
    weighted_total: f64,
    total_weight: f64,
}

impl Blend {
    /// Start an empty blend.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weighted_total: 0.0,
            total_weight: 0.0,
        }
    }

    /// Add one sub-score under a weight.
    ///
    /// Non-finite scores and non-positive or non-finite weights are
    /// ignored rather than poisoning the blend.
    #[expect(
        clippy::float_arithmetic,
        reason = "the blend is a running weighted sum"
    )]
    pub fn add(&mut self, score: f64, weight: f64) {
        if !score.is_finite() || !weight.is_finite() || weight <= 0.0 {
            return;
        }
        self.weighted_total += score * weight;
        self.total_weight += weight;
    }

    /// Add a sub-score that may be missing.
    pub fn add_maybe(&mut self, score: Option<f64>, weight: f64) {
        if let Some(value) = score {
            self.add(value, weight);
        }
    }

    /// Report whether any weighted contribution landed.
    #[must_use]
    pub fn has_weight(&self) -> bool {
        self.total_weight > 0.0
    }

    /// Resolve to the weighted mean clamped into `0.0..=100.0`, or the
    /// neutral 50 when nothing was accumulated.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "resolution divides the weighted sum by the accumulated weight"
    )]
    pub fn score_or_neutral(&self) -> f64 {
        if self.total_weight <= 0.0 {
            return NEUTRAL_SCORE;
        }
        (self.weighted_total / self.total_weight).clamp(0.0, 100.0)
    }
}
