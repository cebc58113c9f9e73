//! Location store port
//!
//! Persists the configured location of each provider.

use async_trait::async_trait;
use domain::Location;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisting configured locations, keyed by provider name
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationStorePort: Send + Sync {
    /// Load the stored location for `provider`, if any
    async fn load(&self, provider: &str) -> Result<Option<Location>, ApplicationError>;

    /// Store `location` as the configured location for `provider`
    async fn save(&self, provider: &str, location: &Location) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn LocationStorePort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn LocationStorePort>();
    }
}
