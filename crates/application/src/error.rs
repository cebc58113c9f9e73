//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The user's location choice could not be resolved
    #[error("{provider}: {message}")]
    LocationSelection {
        /// Provider that rejected the selection
        provider: String,
        /// What was wrong with the input
        message: String,
    },

    /// A fetched page did not have the expected layout
    #[error("{provider}: unexpected page structure: {message}")]
    PageStructure {
        /// Provider whose page was malformed
        provider: String,
        /// Description of the missing part
        message: String,
    },

    /// Fetching a page failed
    #[error("Page source error: {0}")]
    PageSource(String),

    /// Reading or writing stored locations failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The provider's top-level listing offered nothing to choose from
    #[error("{provider}: no locations to choose from")]
    NoLocations {
        /// Provider whose listing was empty
        provider: String,
    },
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::PageSource(_))
    }

    /// Check if this error was caused by what the user typed
    pub const fn is_user_input(&self) -> bool {
        matches!(self, Self::LocationSelection { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_page_source_is_retryable() {
        assert!(ApplicationError::PageSource("timeout".into()).is_retryable());
        assert!(!ApplicationError::Storage("disk".into()).is_retryable());
        assert!(
            !ApplicationError::LocationSelection {
                provider: "rp5".into(),
                message: "bad".into(),
            }
            .is_retryable()
        );
        assert!(
            !ApplicationError::PageStructure {
                provider: "rp5".into(),
                message: "gone".into(),
            }
            .is_retryable()
        );
    }

    #[test]
    fn selection_is_user_input() {
        let err = ApplicationError::LocationSelection {
            provider: "rp5".into(),
            message: "bad".into(),
        };
        assert!(err.is_user_input());
        assert!(!ApplicationError::Configuration("x".into()).is_user_input());
    }

    #[test]
    fn display_includes_provider() {
        let err = ApplicationError::NoLocations {
            provider: "rp5".into(),
        };
        assert_eq!(err.to_string(), "rp5: no locations to choose from");

        let err = ApplicationError::PageStructure {
            provider: "rp5".into(),
            message: "div#archiveString not found".into(),
        };
        assert!(err.to_string().starts_with("rp5: unexpected page structure"));
    }

    #[test]
    fn domain_error_converts() {
        let err: ApplicationError = DomainError::InvalidLocation("empty".into()).into();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }
}
