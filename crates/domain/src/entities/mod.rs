//! Domain entities

mod weather_info;

pub use weather_info::{WeatherField, WeatherInfo};
