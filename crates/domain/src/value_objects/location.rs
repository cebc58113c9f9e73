//! Location value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// A selectable location: the label shown to the user and the page it
/// resolves to on the provider's site
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Display name
    name: String,
    /// Fully resolved page URL
    url: String,
}

impl Location {
    /// Create a location from already trusted parts (e.g. parsed markup)
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Check that both parts are non-blank
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocation` naming the blank part.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidLocation(
                "location name cannot be empty".to_string(),
            ));
        }
        if self.url.trim().is_empty() {
            return Err(DomainError::InvalidLocation(format!(
                "location '{}' has an empty URL",
                self.name
            )));
        }
        Ok(())
    }

    /// Get the display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the resolved URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
