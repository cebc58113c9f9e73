//! Value Objects - Immutable, identity-less domain primitives

mod forecast_day;
mod location;

pub use forecast_day::ForecastDay;
pub use location::Location;
