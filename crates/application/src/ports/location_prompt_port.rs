//! Location prompt port
//!
//! The interactive half of configuration: showing a listing and reading
//! the user's choice.

use async_trait::async_trait;
use domain::Location;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the user-facing side of location selection
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationPromptPort: Send + Sync {
    /// Show `locations` as a numbered list starting at 1
    async fn present(&self, locations: &[Location]) -> Result<(), ApplicationError>;

    /// Read one raw selection from the user
    async fn read_selection(&self) -> Result<String, ApplicationError>;
}
