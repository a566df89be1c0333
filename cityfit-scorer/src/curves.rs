//! Curve-shaped scoring primitives: diminishing-returns amenity curves,
//! the critical-mass presence curve, and Gaussian political alignment.

use cityfit_core::PoliticalLean;

/// Baseline score for an amenity that exists at all.
const AMENITY_FLOOR: f64 = 30.0;

/// Score an amenity count with diminishing returns past critical mass.
///
/// Three regimes: at or below `min` the score is a flat 30 (any presence
/// at all keeps a city off the floor); between `min` and `plateau` a
/// linear ramp climbs to 75; past `plateau` a logarithmic tail crawls
/// towards 100 at `max`. Having *some* nightlife matters a lot; having
/// far more than enough barely matters.
///
/// # Examples
/// ```
/// use cityfit_scorer::amenity_score;
///
/// assert_eq!(amenity_score(0.0, 0.5, 5.0, 15.0), 30.0);
/// assert_eq!(amenity_score(5.0, 0.5, 5.0, 15.0), 75.0);
/// assert_eq!(amenity_score(20.0, 0.5, 5.0, 15.0), 100.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "curve evaluation is ramp and log arithmetic over the segment bounds"
)]
pub fn amenity_score(value: f64, min: f64, plateau: f64, max: f64) -> f64 {
    if !value.is_finite() || value <= min {
        return AMENITY_FLOOR;
    }
    if value >= max {
        return 100.0;
    }
    if value >= plateau {
        let progress = (value - plateau) / (max - plateau);
        return 75.0 + 25.0 * (1.0 + 9.0 * progress).log10();
    }
    AMENITY_FLOOR + 45.0 * (value - min) / (plateau - min)
}

/// Score minority-community presence against a user threshold.
///
/// At or above the threshold, a capped logarithmic bonus: presence past
/// critical mass has fast-diminishing marginal value. Below it, a
/// steeper linear penalty: falling short hurts quickly.
///
/// # Examples
/// ```
/// use cityfit_scorer::presence_score;
///
/// assert_eq!(presence_score(10.0, 10.0), 75.0);
/// assert!(presence_score(25.0, 10.0) > 95.0);
/// assert_eq!(presence_score(0.0, 10.0), 35.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "presence curve mixes a log bonus with a linear shortfall penalty"
)]
pub fn presence_score(actual_pct: f64, target_pct: f64) -> f64 {
    if !actual_pct.is_finite() || !target_pct.is_finite() {
        return cityfit_core::NEUTRAL_SCORE;
    }
    if actual_pct >= target_pct {
        let bonus = 15.0 * (1.0 + 2.0 * (actual_pct - target_pct)).log10();
        (75.0 + bonus).min(100.0)
    } else {
        let penalty = 4.0 * (target_pct - actual_pct);
        (75.0 - penalty).max(0.0)
    }
}

/// Score political alignment with Gaussian distance decay.
///
/// The stated lean maps to a target partisan index; the decay steepness
/// grows with stated importance (`k = 1 + importance/50`), so the same
/// distance costs a high-importance user more. A `Swing` preference
/// measures distance from perfect competitiveness rather than from a
/// side. Crossing ideological sides carries an extra multiplicative
/// penalty: x0.85 for strongly partisan targets (`|target| >= 0.3`),
/// x0.95 for mild ones. Weak preferences decay smoothly by distance
/// alone; strong preferences additionally penalise the wrong team.
///
/// Returns `None` for [`PoliticalLean::Neutral`] or a non-finite index:
/// the political sub-metric then drops out of the blend entirely.
///
/// # Examples
/// ```
/// use cityfit_core::PoliticalLean;
/// use cityfit_scorer::alignment_score;
///
/// let at_target = alignment_score(-0.7, PoliticalLean::StrongDem, 50.0);
/// assert_eq!(at_target, Some(100.0));
/// assert!(alignment_score(0.4, PoliticalLean::Neutral, 50.0).is_none());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "Gaussian decay and the tribal penalty are floating-point by nature"
)]
pub fn alignment_score(actual_index: f64, lean: PoliticalLean, importance: f64) -> Option<f64> {
    let target = lean.target_index()?;
    if !actual_index.is_finite() {
        return None;
    }
    let distance = if lean == PoliticalLean::Swing {
        actual_index.abs()
    } else {
        (actual_index - target).abs()
    };
    let steepness = 1.0 + importance.clamp(0.0, 100.0) / 50.0;
    let mut score = 100.0 * (-steepness * distance * distance).exp();
    // Opposite sides of center; swing targets have no side.
    if actual_index * target < 0.0 {
        score *= if target.abs() >= 0.3 { 0.85 } else { 0.95 };
    }
    Some(score)
}
