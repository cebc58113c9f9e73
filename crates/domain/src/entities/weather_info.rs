//! Weather record produced by a provider

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field of [`WeatherInfo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherField {
    /// Weather condition phrase
    Condition,
    /// Temperature
    Temperature,
    /// Feels-like temperature
    FeelsLike,
}

impl WeatherField {
    /// All fields in display order
    pub const ALL: [Self; 3] = [Self::Condition, Self::Temperature, Self::FeelsLike];

    /// Wire key used in the serialized mapping
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Condition => "cond",
            Self::Temperature => "temp",
            Self::FeelsLike => "feal_temp",
        }
    }
}

impl fmt::Display for WeatherField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Weather extracted from one page
///
/// Every field is optional: a provider only fills what the page actually
/// contains, and an absent field is a valid outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherInfo {
    /// Condition phrase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cond: Option<String>,
    /// Temperature text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temp: Option<String>,
    /// Feels-like temperature text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    feal_temp: Option<String>,
}

impl WeatherInfo {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value
    pub fn set(&mut self, field: WeatherField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Builder-style [`set`](Self::set)
    #[must_use]
    pub fn with(mut self, field: WeatherField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Get a field if present
    #[must_use]
    pub fn get(&self, field: WeatherField) -> Option<&str> {
        match field {
            WeatherField::Condition => self.cond.as_deref(),
            WeatherField::Temperature => self.temp.as_deref(),
            WeatherField::FeelsLike => self.feal_temp.as_deref(),
        }
    }

    /// Check whether a field is present
    #[must_use]
    pub fn contains(&self, field: WeatherField) -> bool {
        self.get(field).is_some()
    }

    /// Condition phrase
    #[must_use]
    pub fn condition(&self) -> Option<&str> {
        self.cond.as_deref()
    }

    /// Temperature text
    #[must_use]
    pub fn temperature(&self) -> Option<&str> {
        self.temp.as_deref()
    }

    /// Feels-like temperature text
    #[must_use]
    pub fn feels_like(&self) -> Option<&str> {
        self.feal_temp.as_deref()
    }

    /// Number of present fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields().count()
    }

    /// True if nothing was extracted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present fields in display order
    pub fn fields(&self) -> impl Iterator<Item = (WeatherField, &str)> {
        WeatherField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    fn slot_mut(&mut self, field: WeatherField) -> &mut Option<String> {
        match field {
            WeatherField::Condition => &mut self.cond,
            WeatherField::Temperature => &mut self.temp,
            WeatherField::FeelsLike => &mut self.feal_temp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let info = WeatherInfo::new();
        assert!(info.is_empty());
        assert_eq!(info.len(), 0);
    }

    #[test]
    fn set_and_get() {
        let mut info = WeatherInfo::new();
        info.set(WeatherField::Temperature, "+5 °C");
        assert_eq!(info.temperature(), Some("+5 °C"));
        assert_eq!(info.get(WeatherField::Temperature), Some("+5 °C"));
        assert!(!info.contains(WeatherField::FeelsLike));
    }

    #[test]
    fn fields_follow_display_order() {
        let info = WeatherInfo::new()
            .with(WeatherField::FeelsLike, "+1 °C")
            .with(WeatherField::Condition, "cloudy");
        let keys: Vec<_> = info.fields().map(|(f, _)| f.key()).collect();
        assert_eq!(keys, vec!["cond", "feal_temp"]);
    }

    #[test]
    fn serialization_skips_absent_keys() {
        let info = WeatherInfo::new()
            .with(WeatherField::Condition, "clear")
            .with(WeatherField::Temperature, "+3");
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json, serde_json::json!({ "cond": "clear", "temp": "+3" }));
    }

    #[test]
    fn field_keys() {
        assert_eq!(WeatherField::FeelsLike.key(), "feal_temp");
        assert_eq!(WeatherField::Condition.to_string(), "cond");
    }
}
