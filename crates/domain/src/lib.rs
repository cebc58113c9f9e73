//! Domain layer for weatherapp
//!
//! Provider-neutral value types shared by every weather provider and the
//! host: locations chosen during configuration, the selected forecast day
//! and the weather record produced by an extraction.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
