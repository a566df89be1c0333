//! Fixed-range and in-run percentile normalization.
//!
//! `range_score` is used wherever a metric has a known, stable
//! real-world extreme (freeze days, crime rates, dew points).
//! `percentile_score` ranks a value against the distribution of the same
//! metric across the cities in the current run, so its output shifts as
//! the comparison set changes; fixed-range scores never do.

use cityfit_core::NEUTRAL_SCORE;

/// Map `value` into `0.0..=100.0` against fixed real-world bounds.
///
/// The value is clamped into `min..=max` before scaling, and the result
/// is rounded to a whole point. `invert` flips the scale for
/// less-is-better metrics. The degenerate `min == max` range returns the
/// neutral 50, as does a non-finite value.
///
/// # Examples
/// ```
/// use cityfit_scorer::range_score;
///
/// assert_eq!(range_score(0.0, 0.0, 160.0, true), 100.0);
/// assert_eq!(range_score(40.0, 0.0, 160.0, false), 25.0);
/// assert_eq!(range_score(999.0, 0.0, 160.0, false), 100.0);
/// assert_eq!(range_score(7.0, 7.0, 7.0, false), 50.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "range normalization is position arithmetic over the bounds"
)]
pub fn range_score(value: f64, min: f64, max: f64, invert: bool) -> f64 {
    if !value.is_finite() || min == max {
        return NEUTRAL_SCORE;
    }
    let clamped = value.clamp(min, max);
    let position = (clamped - min) / (max - min);
    let oriented = if invert { 1.0 - position } else { position };
    (oriented * 100.0).round()
}

/// Rank `value` against a sorted distribution from the current run.
///
/// Returns the share of values strictly below `value`, scaled to
/// `0.0..=100.0`, flipped when lower is better. An empty distribution
/// cannot rank anything and returns the neutral 50.
///
/// Callers must understand the result is dataset-relative: the same city
/// ranks differently inside different comparison sets.
///
/// # Examples
/// ```
/// use cityfit_scorer::percentile_score;
///
/// let sorted = [10.0, 20.0, 30.0, 40.0];
/// assert_eq!(percentile_score(35.0, &sorted, true), 75.0);
/// assert_eq!(percentile_score(35.0, &sorted, false), 25.0);
/// assert_eq!(percentile_score(35.0, &[], true), 50.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "percentile rank divides a below-count by the set size"
)]
pub fn percentile_score(value: f64, sorted: &[f64], higher_is_better: bool) -> f64 {
    if sorted.is_empty() || !value.is_finite() {
        return NEUTRAL_SCORE;
    }
    let below = sorted.partition_point(|candidate| *candidate < value);
    let pct = 100.0 * below as f64 / sorted.len() as f64;
    if higher_is_better { pct } else { 100.0 - pct }
}
