//! Application services - Use case implementations

mod configuration_service;
mod weather_service;

pub use configuration_service::ConfigurationService;
pub use weather_service::WeatherService;
