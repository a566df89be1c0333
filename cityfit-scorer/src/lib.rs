//! Scoring engine for the cityfit city-ranking system.
//!
//! The crate turns a list of read-only city metric records plus one user
//! preference record into six bounded 0-100 category scores and a ranked
//! composite, using a consistent family of normalization algorithms:
//!
//! - **Fixed-range mapping** ([`range_score`]) for metrics with known
//!   real-world extremes.
//! - **In-run percentile ranking** ([`percentile_score`]) for metrics
//!   scored against the current comparison set, fed by the run-scoped
//!   [`PercentileCache`](cityfit_core::PercentileCache).
//! - **Diminishing-returns curves** ([`amenity_score`],
//!   [`presence_score`]) for amenities and community presence.
//! - **Gaussian alignment decay** ([`alignment_score`]) for political
//!   fit.
//!
//! The engine is deterministic and side-effect-free: no I/O, no global
//! state, no randomness. Missing data never errors; it degrades each
//! category towards the neutral score of 50.
//!
//! # Examples
//!
//! ```
//! use cityfit_core::test_support::{FlatParityCalculator, sample_city};
//! use cityfit_core::{Category, UserPreferences};
//! use cityfit_scorer::CityRanker;
//!
//! let ranker = CityRanker::new(FlatParityCalculator);
//! let cities = vec![sample_city(1, "Columbus"), sample_city(2, "Dayton")];
//! let prefs = UserPreferences::default().with_weight(Category::Climate, 90.0);
//! let ranking = ranker.rank(&cities, &prefs);
//! assert_eq!(ranking.included + ranking.excluded, 2);
//! ```

#![forbid(unsafe_code)]

mod blend;
pub mod categories;
mod curves;
mod engine;
mod normalize;

pub use blend::Blend;
pub use curves::{alignment_score, amenity_score, presence_score};
pub use engine::CityRanker;
pub use normalize::{percentile_score, range_score};

#[cfg(test)]
mod tests;
