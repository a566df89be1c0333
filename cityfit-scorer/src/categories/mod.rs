//! The six category scorers.

mod climate;
mod cost;
mod dating;
mod demographics;
mod entertainment;
mod quality_of_life;
mod values;

pub use climate::ClimateScorer;
pub use cost::CostScorer;
pub use demographics::DemographicsScorer;
pub use entertainment::EntertainmentScorer;
pub use quality_of_life::QualityOfLifeScorer;
pub use values::ValuesScorer;
