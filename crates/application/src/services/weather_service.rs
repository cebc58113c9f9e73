//! Weather service
//!
//! Looks up weather at a provider's configured location.

use std::{fmt, sync::Arc};

use domain::{ForecastDay, Location, WeatherInfo};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{LocationStorePort, WeatherProviderPort},
};

/// Service for weather lookups
pub struct WeatherService {
    store: Arc<dyn LocationStorePort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(store: Arc<dyn LocationStorePort>) -> Self {
        Self { store }
    }

    /// Location weather is reported for: the stored one, or the provider
    /// default when nothing is configured
    #[instrument(skip(self, provider), fields(provider = provider.name()))]
    pub async fn location(
        &self,
        provider: &dyn WeatherProviderPort,
    ) -> Result<Location, ApplicationError> {
        match self.store.load(provider.name()).await? {
            Some(location) => Ok(location),
            None => {
                debug!("No stored location, using provider default");
                Ok(provider.default_location())
            },
        }
    }

    /// Weather for `day` at the configured location
    #[instrument(skip(self, provider), fields(provider = provider.name()))]
    pub async fn current(
        &self,
        provider: &dyn WeatherProviderPort,
        day: ForecastDay,
    ) -> Result<(Location, WeatherInfo), ApplicationError> {
        let location = self.location(provider).await?;
        let info = provider.weather(location.url(), day).await?;
        debug!(location = %location, fields = info.len(), "Weather retrieved");
        Ok((location, info))
    }
}
