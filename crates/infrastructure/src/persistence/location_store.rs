//! TOML-backed location store
//!
//! One table per provider:
//!
//! ```toml
//! [rp5]
//! name = "Київ"
//! url = "http://rp5.ua/..."
//! ```

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use application::{error::ApplicationError, ports::LocationStorePort};
use async_trait::async_trait;
use domain::Location;
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors reading or writing the location file
#[derive(Debug, Error)]
pub enum LocationStoreError {
    /// Filesystem access failed
    #[error("{}: {source}", path.display())]
    Io {
        /// File that was accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The file is not valid location TOML
    #[error("{}: {source}", path.display())]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// The locations could not be serialized
    #[error("failed to serialize locations: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl From<LocationStoreError> for ApplicationError {
    fn from(err: LocationStoreError) -> Self {
        Self::Storage(err.to_string())
    }
}

type Locations = BTreeMap<String, Location>;

/// Location store keeping all providers in a single TOML file
#[derive(Debug, Clone)]
pub struct TomlLocationStore {
    path: PathBuf,
}

impl TomlLocationStore {
    /// Create a store for the file at `path`; the file is created on first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Locations, LocationStoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Locations::new()),
            Err(source) => {
                return Err(LocationStoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            },
        };

        toml::from_str(&raw).map_err(|source| LocationStoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    async fn write_all(&self, locations: &Locations) -> Result<(), LocationStoreError> {
        let io_err = |source| LocationStoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let contents = toml::to_string(locations)?;
        let tmp = self.path.with_extension("toml.tmp");
        tokio::fs::write(&tmp, contents).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)
    }
}

#[async_trait]
impl LocationStorePort for TomlLocationStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self, provider: &str) -> Result<Option<Location>, ApplicationError> {
        let Some(location) = self.read_all().await?.remove(provider) else {
            debug!("No stored location");
            return Ok(None);
        };
        location.validate()?;
        Ok(Some(location))
    }

    #[instrument(skip(self, location), fields(path = %self.path.display(), location = %location))]
    async fn save(&self, provider: &str, location: &Location) -> Result<(), ApplicationError> {
        location.validate()?;

        let mut locations = self.read_all().await?;
        locations.insert(provider.to_string(), location.clone());
        self.write_all(&locations).await?;

        debug!("Location stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kyiv() -> Location {
        Location::new("Київ", "http://rp5.ua/Kyiv")
    }

    #[tokio::test]
    async fn load_from_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlLocationStore::new(dir.path().join("locations.toml"));
        assert!(store.load("rp5").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlLocationStore::new(dir.path().join("locations.toml"));

        store.save("rp5", &kyiv()).await.unwrap();
        assert_eq!(store.load("rp5").await.unwrap(), Some(kyiv()));
    }

    #[tokio::test]
    async fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/locations.toml");
        let store = TomlLocationStore::new(&path);

        store.save("rp5", &kyiv()).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn file_has_one_table_per_provider() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlLocationStore::new(dir.path().join("locations.toml"));

        store.save("rp5", &kyiv()).await.unwrap();
        store
            .save("other", &Location::new("Lviv", "http://example.com/lviv"))
            .await
            .unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("[rp5]"));
        assert!(raw.contains("[other]"));
        assert!(raw.contains("name = \"Київ\""));
        assert_eq!(store.load("rp5").await.unwrap(), Some(kyiv()));
    }

    #[tokio::test]
    async fn save_replaces_previous_location() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlLocationStore::new(dir.path().join("locations.toml"));

        store.save("rp5", &kyiv()).await.unwrap();
        let lviv = Location::new("Львів", "http://rp5.ua/Lviv");
        store.save("rp5", &lviv).await.unwrap();

        assert_eq!(store.load("rp5").await.unwrap(), Some(lviv));
    }

    #[tokio::test]
    async fn corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let err = TomlLocationStore::new(&path).load("rp5").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Storage(_)));
    }

    #[tokio::test]
    async fn blank_location_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlLocationStore::new(dir.path().join("locations.toml"));

        let err = store
            .save("rp5", &Location::new(" ", "http://rp5.ua/x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(_)));
        assert!(!store.path().exists());
    }
}
