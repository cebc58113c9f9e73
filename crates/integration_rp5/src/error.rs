//! RP5 provider error types

use thiserror::Error;

/// Why a location selection was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Input is not an integer
    #[error("You have entered the wrong data format! Repeat again, input a number.")]
    WrongFormat {
        /// The rejected input
        input: String,
    },

    /// Input is an integer but names no entry of the listing
    #[error("You have entered a non-existent number in the list! Repeat again.")]
    NotInList {
        /// The rejected input
        input: String,
        /// Number of entries that were offered
        len: usize,
    },
}

impl SelectionError {
    /// The raw input that was rejected
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::WrongFormat { input } | Self::NotInList { input, .. } => input,
        }
    }
}

/// Errors that can occur while navigating or extracting RP5 pages
#[derive(Debug, Error)]
pub enum Rp5Error {
    /// User input during location drill-down was invalid
    #[error("{provider}: {reason}")]
    LocationSelection {
        /// Provider that rejected the selection
        provider: &'static str,
        /// What was wrong with it
        #[source]
        reason: SelectionError,
    },

    /// A required element is missing from the page
    #[error("{provider}: unexpected page structure, '{element}' not found")]
    PageStructure {
        /// Provider whose page changed
        provider: &'static str,
        /// CSS selector of the missing element
        element: &'static str,
    },

    /// A built-in CSS selector failed to compile
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector {
        /// The selector source
        selector: &'static str,
        /// Parser message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Rp5Error {
    /// Create a page structure error for the given selector
    #[must_use]
    pub const fn missing(element: &'static str) -> Self {
        Self::PageStructure {
            provider: crate::PROVIDER_NAME,
            element,
        }
    }

    /// Returns true if the user can fix this by entering different input
    #[must_use]
    pub const fn is_user_input(&self) -> bool {
        matches!(self, Self::LocationSelection { .. })
    }
}
