#![forbid(unsafe_code)]
//! RP5 weather provider for weatherapp
//!
//! Scraping adapter for <https://rp5.ua>. It does no I/O of its own: the
//! host fetches pages and hands their HTML to this crate.
//!
//! # Architecture
//!
//! - [`navigator`] turns a listing page into selectable [`Location`]s,
//!   trying the [`CountryMapLinks`] strategy first and [`HeadingLinks`]
//!   when that finds nothing.
//! - [`extractor`] turns a city page into a [`WeatherInfo`], using
//!   [`TodayExtractor`] or [`TomorrowExtractor`] depending on the
//!   requested [`ForecastDay`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_rp5::{Rp5Config, Rp5Provider};
//! use domain::ForecastDay;
//!
//! let provider = Rp5Provider::new(Rp5Config::default())?;
//! let countries = provider.parse_locations(&listing_html)?;
//! let weather = provider.extract_weather(&city_html, ForecastDay::Today)?;
//! ```

mod config;
mod error;
pub mod extractor;
mod markup;
pub mod navigator;
mod urlencoding;

pub use config::Rp5Config;
pub use error::{Rp5Error, SelectionError};
pub use extractor::{DayExtractor, TodayExtractor, TomorrowExtractor};
pub use navigator::{CountryMapLinks, HeadingLinks, ListingStrategy};
pub use urlencoding::quote;

use domain::{ForecastDay, Location, WeatherInfo};
use tracing::{debug, instrument};

/// Stable provider identifier used for configuration and persistence
pub const PROVIDER_NAME: &str = "rp5";

/// Human-readable provider title
pub const PROVIDER_TITLE: &str = "RP5";

/// RP5 provider: identity, defaults and the parsing entry points
#[derive(Debug, Clone)]
pub struct Rp5Provider {
    config: Rp5Config,
}

impl Rp5Provider {
    /// Create a provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `Rp5Error::Configuration` if the configuration is invalid.
    pub fn new(config: Rp5Config) -> Result<Self, Rp5Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a provider with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in defaults fail validation.
    pub fn with_defaults() -> Result<Self, Rp5Error> {
        Self::new(Rp5Config::default())
    }

    /// Provider identifier
    #[must_use]
    pub const fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    /// Provider title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        PROVIDER_TITLE
    }

    /// Location used before the user configured one
    #[must_use]
    pub fn default_location(&self) -> Location {
        Location::new(
            self.config.default_location_name.clone(),
            self.config.default_location_url.clone(),
        )
    }

    /// Top-level listing page where configuration starts
    #[must_use]
    pub fn browse_url(&self) -> &str {
        &self.config.browse_url
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &Rp5Config {
        &self.config
    }

    /// Parse a listing page into child locations, in document order
    ///
    /// An empty result means the page is a leaf location.
    #[instrument(skip(self, html), fields(provider = PROVIDER_NAME))]
    pub fn parse_locations(&self, html: &str) -> Result<Vec<Location>, Rp5Error> {
        let locations = navigator::parse_locations(html, &self.config)?;
        debug!(count = locations.len(), "Parsed RP5 listing page");
        Ok(locations)
    }

    /// Resolve a 1-based user selection against a listing
    ///
    /// # Errors
    ///
    /// Returns `Rp5Error::LocationSelection` for non-numeric input or a
    /// number outside the listing.
    pub fn select_location<'a>(
        &self,
        locations: &'a [Location],
        input: &str,
    ) -> Result<&'a Location, Rp5Error> {
        navigator::select_location(locations, input).map_err(|reason| {
            Rp5Error::LocationSelection {
                provider: PROVIDER_NAME,
                reason,
            }
        })
    }

    /// Extract weather for the requested day from a city page
    ///
    /// # Errors
    ///
    /// Returns `Rp5Error::PageStructure` if the page lacks the container
    /// that day's markup lives in.
    pub fn extract_weather(&self, html: &str, day: ForecastDay) -> Result<WeatherInfo, Rp5Error> {
        extractor::extract(html, day)
    }
}
