//! Weather provider port
//!
//! The generic interface every weather site adapter offers to the host.

use async_trait::async_trait;
use domain::{ForecastDay, Location, WeatherInfo};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for a weather provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherProviderPort: Send + Sync {
    /// Stable identifier used for configuration and persistence
    fn name(&self) -> &'static str;

    /// Human-readable title
    fn title(&self) -> &'static str;

    /// Location used before the user configured one
    fn default_location(&self) -> Location;

    /// Top-level listing page where configuration starts
    fn browse_url(&self) -> String;

    /// Child locations listed on the page at `url`, in page order
    ///
    /// An empty result means `url` is a leaf location.
    async fn list_locations(&self, url: &str) -> Result<Vec<Location>, ApplicationError>;

    /// Resolve a 1-based selection typed by the user
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::LocationSelection` if `input` is not a
    /// number or is outside the listing.
    fn select_location(
        &self,
        locations: &[Location],
        input: &str,
    ) -> Result<Location, ApplicationError>;

    /// Weather for `day` at the location page `url`
    async fn weather(&self, url: &str, day: ForecastDay) -> Result<WeatherInfo, ApplicationError>;
}
