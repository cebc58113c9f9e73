//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A location was built from an empty name or URL
    #[error("Invalid location: {0}")]
    InvalidLocation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_location_error_message() {
        let err = DomainError::InvalidLocation("name is empty".to_string());
        assert_eq!(err.to_string(), "Invalid location: name is empty");
    }
}
