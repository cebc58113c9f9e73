//! Persistence of configured locations

mod location_store;

pub use location_store::{LocationStoreError, TomlLocationStore};
