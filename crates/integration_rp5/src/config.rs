//! RP5 provider configuration

use serde::{Deserialize, Serialize};

use crate::Rp5Error;

/// Configuration for the RP5 provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rp5Config {
    /// Site root that listing hrefs are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Top-level listing page where location drill-down starts
    #[serde(default = "default_browse_url")]
    pub browse_url: String,

    /// Name of the location used before any configuration exists
    #[serde(default = "default_location_name")]
    pub default_location_name: String,

    /// URL of the location used before any configuration exists
    #[serde(default = "default_location_url")]
    pub default_location_url: String,
}

fn default_base_url() -> String {
    "http://rp5.ua".to_string()
}

fn default_browse_url() -> String {
    "http://rp5.ua/Погода_в_світі".to_string()
}

fn default_location_name() -> String {
    "Київ".to_string()
}

fn default_location_url() -> String {
    "http://rp5.ua/Погода_в_Києві".to_string()
}

impl Default for Rp5Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            browse_url: default_browse_url(),
            default_location_name: default_location_name(),
            default_location_url: default_location_url(),
        }
    }
}

impl Rp5Config {
    /// Base URL without a trailing slash
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `Rp5Error::Configuration` naming the first offending field.
    pub fn validate(&self) -> Result<(), Rp5Error> {
        for (field, value) in [
            ("base_url", &self.base_url),
            ("browse_url", &self.browse_url),
            ("default_location_url", &self.default_location_url),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(Rp5Error::Configuration(format!(
                    "{field} must be an http(s) URL, got '{value}'"
                )));
            }
        }

        if self.default_location_name.trim().is_empty() {
            return Err(Rp5Error::Configuration(
                "default_location_name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
