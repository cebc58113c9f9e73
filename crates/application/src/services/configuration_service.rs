//! Configuration service
//!
//! Interactive drill-down from a provider's top-level listing to a leaf
//! location, which is then stored as the provider's configured location.

use std::{fmt, sync::Arc};

use domain::Location;
use tracing::{debug, error, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{LocationPromptPort, LocationStorePort, WeatherProviderPort},
};

/// Service that configures the location of a provider
pub struct ConfigurationService {
    store: Arc<dyn LocationStorePort>,
    prompt: Arc<dyn LocationPromptPort>,
}

impl fmt::Debug for ConfigurationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationService").finish_non_exhaustive()
    }
}

impl ConfigurationService {
    /// Create a new configuration service
    pub fn new(store: Arc<dyn LocationStorePort>, prompt: Arc<dyn LocationPromptPort>) -> Self {
        Self { store, prompt }
    }

    /// Walk the provider's location tree with the user and store the leaf
    ///
    /// Each listing is presented and one selection is read; the chosen
    /// location's page is listed next. The walk ends on the first empty
    /// listing, and the location selected last is stored.
    ///
    /// With `debug` set, a rejected selection is logged at debug level with
    /// the full error; otherwise only its message is logged at error level.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::NoLocations` if the top-level listing is empty
    /// - `ApplicationError::LocationSelection` if the user's input is rejected
    /// - any fetch, parse or storage error from the ports
    #[instrument(skip(self, provider, debug_mode), fields(provider = provider.name(), debug = debug_mode))]
    pub async fn configure(
        &self,
        provider: &dyn WeatherProviderPort,
        debug_mode: bool,
    ) -> Result<Location, ApplicationError> {
        let mut locations = provider.list_locations(&provider.browse_url()).await?;
        if locations.is_empty() {
            return Err(ApplicationError::NoLocations {
                provider: provider.name().to_string(),
            });
        }

        let selected = loop {
            self.prompt.present(&locations).await?;
            let input = self.prompt.read_selection().await?;

            let chosen = provider
                .select_location(&locations, &input)
                .inspect_err(|e| {
                    if debug_mode {
                        debug!(error = ?e, input = %input, "Location selection rejected");
                    } else {
                        error!("{e}");
                    }
                })?;
            debug!(location = %chosen, url = chosen.url(), "Location selected");

            let children = provider.list_locations(chosen.url()).await?;
            if children.is_empty() {
                break chosen;
            }
            locations = children;
        };

        self.store.save(provider.name(), &selected).await?;
        info!(location = %selected, "Configured location stored");

        Ok(selected)
    }
}
