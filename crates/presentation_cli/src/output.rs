//! Rendering of command results

use domain::{Location, WeatherInfo};

/// Location name followed by one `key: value` line per present field
pub fn format_weather(location: &Location, info: &WeatherInfo) -> String {
    let mut out = format!("{}\n", location.name());
    for (field, value) in info.fields() {
        out.push_str(&format!("{}: {value}\n", field.key()));
    }
    out
}

/// The weather mapping as pretty JSON
pub fn format_weather_json(info: &WeatherInfo) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(info)
}
