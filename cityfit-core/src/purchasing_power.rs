//! Purchasing-power collaborator interface.
//!
//! The cost-of-living calculation itself lives upstream; the engine only
//! consumes an index where 100 means national-average purchasing power
//! and higher means a dollar goes further.

use crate::{CostMetrics, HousingPersona, WorkPersona};

/// Inputs handed to the purchasing-power collaborator.
#[derive(Debug, Clone, Copy)]
pub struct PurchasingPowerInputs<'a> {
    /// The city's cost sub-record (regional price parities, prices, tax
    /// aggregates).
    pub cost: &'a CostMetrics,
    /// Housing persona from the user's cost preferences.
    pub housing: HousingPersona,
    /// Work persona from the user's cost preferences.
    pub work: WorkPersona,
    /// Two-letter state code, when known.
    pub state: Option<&'a str>,
}

/// Compute a true purchasing-power index for a city and persona pair.
///
/// Implementations return `None` when the inputs are insufficient; the
/// cost scorer then falls back to home-price scaling and finally to the
/// neutral score. Implementations must be `Send + Sync` so concurrent
/// ranking requests can share one calculator.
///
/// # Examples
///
/// ```rust
/// use cityfit_core::{
///     CostMetrics, HousingPersona, PurchasingPowerCalculator, PurchasingPowerInputs,
///     WorkPersona,
/// };
///
/// struct ParityOnly;
///
/// impl PurchasingPowerCalculator for ParityOnly {
///     fn purchasing_power_index(&self, inputs: &PurchasingPowerInputs<'_>) -> Option<f64> {
///         inputs.cost.rpp_all_items.map(|rpp| 10_000.0 / rpp)
///     }
/// }
///
/// let cost = CostMetrics {
///     rpp_all_items: Some(125.0),
///     ..CostMetrics::default()
/// };
/// let inputs = PurchasingPowerInputs {
///     cost: &cost,
///     housing: HousingPersona::Renter,
///     work: WorkPersona::Standard,
///     state: None,
/// };
/// assert_eq!(ParityOnly.purchasing_power_index(&inputs), Some(80.0));
/// ```
pub trait PurchasingPowerCalculator: Send + Sync {
    /// Return the purchasing-power index (100 = national average), or
    /// `None` when the inputs cannot support the calculation.
    fn purchasing_power_index(&self, inputs: &PurchasingPowerInputs<'_>) -> Option<f64>;
}
