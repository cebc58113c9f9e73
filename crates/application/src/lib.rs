//! Application layer - Use cases and orchestration
//!
//! Defines the ports the host's collaborators implement and the two use
//! cases built on them: interactive location configuration and weather
//! lookup.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
