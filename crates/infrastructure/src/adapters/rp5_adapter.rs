//! RP5 adapter - Implements WeatherProviderPort using integration_rp5

use std::{fmt, sync::Arc};

use application::{
    error::ApplicationError,
    ports::{PageSourcePort, WeatherProviderPort},
};
use async_trait::async_trait;
use domain::{ForecastDay, Location, WeatherInfo};
use integration_rp5::{Rp5Config, Rp5Error, Rp5Provider};
use tracing::{debug, instrument};

/// Adapter for the RP5 weather site
pub struct Rp5ProviderAdapter {
    provider: Rp5Provider,
    pages: Arc<dyn PageSourcePort>,
}

impl fmt::Debug for Rp5ProviderAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rp5ProviderAdapter")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

impl Rp5ProviderAdapter {
    /// Create an adapter fetching through `pages`
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if `config` is invalid.
    pub fn new(config: Rp5Config, pages: Arc<dyn PageSourcePort>) -> Result<Self, ApplicationError> {
        let provider = Rp5Provider::new(config).map_err(map_error)?;
        Ok(Self { provider, pages })
    }
}

#[async_trait]
impl WeatherProviderPort for Rp5ProviderAdapter {
    fn name(&self) -> &'static str {
        self.provider.name()
    }

    fn title(&self) -> &'static str {
        self.provider.title()
    }

    fn default_location(&self) -> Location {
        self.provider.default_location()
    }

    fn browse_url(&self) -> String {
        self.provider.browse_url().to_string()
    }

    #[instrument(skip(self))]
    async fn list_locations(&self, url: &str) -> Result<Vec<Location>, ApplicationError> {
        let page = self.pages.fetch_page(url).await?;
        self.provider.parse_locations(&page).map_err(map_error)
    }

    fn select_location(
        &self,
        locations: &[Location],
        input: &str,
    ) -> Result<Location, ApplicationError> {
        self.provider
            .select_location(locations, input)
            .cloned()
            .map_err(map_error)
    }

    #[instrument(skip(self))]
    async fn weather(&self, url: &str, day: ForecastDay) -> Result<WeatherInfo, ApplicationError> {
        let page = self.pages.fetch_page(url).await?;
        let info = self.provider.extract_weather(&page, day).map_err(map_error)?;
        debug!(fields = info.len(), "Extracted weather");
        Ok(info)
    }
}

/// Map RP5 errors to application errors
fn map_error(err: Rp5Error) -> ApplicationError {
    match err {
        Rp5Error::LocationSelection { provider, reason } => ApplicationError::LocationSelection {
            provider: provider.to_string(),
            message: reason.to_string(),
        },
        Rp5Error::PageStructure { provider, element } => ApplicationError::PageStructure {
            provider: provider.to_string(),
            message: format!("'{element}' not found"),
        },
        Rp5Error::InvalidSelector { .. } | Rp5Error::Configuration(_) => {
            ApplicationError::Configuration(err.to_string())
        },
    }
}
