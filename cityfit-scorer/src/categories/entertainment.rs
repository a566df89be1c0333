//! Entertainment scoring: nightlife, arts, and dining on diminishing
//! amenity curves, professional sports on a team-count ladder, and
//! outdoor recreation (nature, beach, mountains).

use cityfit_core::{
    Category, CategoryScorer, CityMetrics, NEUTRAL_SCORE, PercentileCache, PercentileMetric,
    QualityOfLifeMetrics, UserPreferences,
};

use crate::{Blend, amenity_score, percentile_score, range_score};

/// Amenity calibrations: `(min, plateau, max)`.
const BARS_CURVE: (f64, f64, f64) = (0.5, 5.0, 15.0);
const MUSEUMS_CURVE: (f64, f64, f64) = (2.0, 30.0, 120.0);
const RESTAURANTS_CURVE: (f64, f64, f64) = (5.0, 20.0, 45.0);

/// Leagues a city must span before the diversity bonus applies.
const LEAGUE_SPREAD: usize = 3;
const LEAGUE_SPREAD_BONUS: f64 = 5.0;

/// Beach proximity: full marks within this distance, then linear decay.
const BEACH_FULL_MILES: f64 = 15.0;
const BEACH_DECAY_PER_MILE: f64 = 2.0;

/// Elevation-range anchor, feet.
const ELEVATION_MAX: f64 = 7000.0;
/// Ski-proximity bonuses by distance, miles.
const SKI_NEAR_MILES: f64 = 50.0;
const SKI_NEAR_BONUS: f64 = 15.0;
const SKI_FAR_MILES: f64 = 100.0;
const SKI_FAR_BONUS: f64 = 8.0;

/// Team-count ladder: value grows quickly for the first franchises and
/// crawls afterwards.
#[expect(
    clippy::float_arithmetic,
    reason = "ladder rungs are base-plus-step arithmetic"
)]
fn sports_ladder(teams: u32) -> f64 {
    match teams {
        0 => 30.0,
        1..=2 => 50.0 + 10.0 * f64::from(teams),
        3..=4 => 65.0 + 7.0 * f64::from(teams - 2),
        5..=6 => 80.0 + 5.0 * f64::from(teams - 4),
        7..=8 => 92.0 + 2.0 * f64::from(teams - 6),
        _ => (97.0 + f64::from((teams - 8).min(3))).min(100.0),
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the league-diversity bonus is additive"
)]
fn sports(cultural: &cityfit_core::CulturalMetrics) -> f64 {
    let mut score = sports_ladder(cultural.total_teams());
    if cultural.leagues_spanned() >= LEAGUE_SPREAD {
        score += LEAGUE_SPREAD_BONUS;
    }
    score.min(100.0)
}

fn nature(qol: &QualityOfLifeMetrics, cache: &PercentileCache) -> Option<f64> {
    let mut blend = Blend::new();
    blend.add_maybe(
        qol.trail_miles
            .map(|miles| percentile_score(miles, cache.values(PercentileMetric::TrailMiles), true)),
        1.0,
    );
    blend.add_maybe(
        qol.park_acres_per_10k.map(|acres| {
            percentile_score(acres, cache.values(PercentileMetric::ParkAcres), true)
        }),
        1.0,
    );
    blend.add_maybe(
        qol.protected_land_percent.map(|share| {
            percentile_score(share, cache.values(PercentileMetric::ProtectedLand), true)
        }),
        1.0,
    );
    blend.has_weight().then(|| blend.score_or_neutral())
}

/// Binary proximity with distance decay past the full-marks radius.
#[expect(
    clippy::float_arithmetic,
    reason = "decay subtracts points per mile past the radius"
)]
fn beach(qol: &QualityOfLifeMetrics) -> Option<f64> {
    let miles = qol
        .nearest_beach_miles
        .filter(|distance| distance.is_finite() && *distance >= 0.0)?;
    if miles <= BEACH_FULL_MILES {
        return Some(100.0);
    }
    Some((100.0 - BEACH_DECAY_PER_MILE * (miles - BEACH_FULL_MILES)).max(0.0))
}

#[expect(
    clippy::float_arithmetic,
    reason = "the ski bonus is additive on the elevation base"
)]
fn mountain(qol: &QualityOfLifeMetrics) -> Option<f64> {
    let base = qol
        .elevation_range_ft
        .map(|delta| range_score(delta, 0.0, ELEVATION_MAX, false))?;
    let bonus = qol
        .nearest_ski_miles
        .filter(|distance| distance.is_finite() && *distance >= 0.0)
        .map_or(0.0, |distance| {
            if distance <= SKI_NEAR_MILES {
                SKI_NEAR_BONUS
            } else if distance <= SKI_FAR_MILES {
                SKI_FAR_BONUS
            } else {
                0.0
            }
        });
    Some((base + bonus).min(100.0))
}

/// Scores nightlife, arts, dining, sports, and recreation.
#[derive(Debug, Default, Copy, Clone)]
pub struct EntertainmentScorer;

impl CategoryScorer for EntertainmentScorer {
    fn category(&self) -> Category {
        Category::Entertainment
    }

    fn score(&self, city: &CityMetrics, prefs: &UserPreferences, cache: &PercentileCache) -> f64 {
        let weights = &prefs.entertainment;
        let mut blend = Blend::new();

        if let Some(cultural) = city.cultural.as_ref() {
            blend.add_maybe(
                cultural.bars_per_10k.map(|density| {
                    amenity_score(density, BARS_CURVE.0, BARS_CURVE.1, BARS_CURVE.2)
                }),
                weights.nightlife_weight,
            );
            blend.add_maybe(
                cultural.museums_count.map(|count| {
                    amenity_score(count, MUSEUMS_CURVE.0, MUSEUMS_CURVE.1, MUSEUMS_CURVE.2)
                }),
                weights.arts_weight,
            );
            blend.add_maybe(
                cultural.restaurants_per_10k.map(|density| {
                    amenity_score(
                        density,
                        RESTAURANTS_CURVE.0,
                        RESTAURANTS_CURVE.1,
                        RESTAURANTS_CURVE.2,
                    )
                }),
                weights.dining_weight,
            );
            blend.add(sports(cultural), weights.sports_weight);
        }

        if let Some(qol) = city.quality_of_life.as_ref() {
            blend.add_maybe(nature(qol, cache), weights.nature_weight);
            blend.add_maybe(beach(qol), weights.beach_weight);
            blend.add_maybe(mountain(qol), weights.mountain_weight);
        }

        if !blend.has_weight() {
            return NEUTRAL_SCORE;
        }
        Self::sanitise(blend.score_or_neutral())
    }
}
