//! Infrastructure layer - Adapters for the host's collaborators
//!
//! Implements the application ports: page fetching over HTTP, the RP5
//! provider adapter, the TOML location store, plus configuration loading
//! logging setup and the metrics recorder.

pub mod adapters;
pub mod config;
pub mod http;
pub mod persistence;
pub mod retry;
pub mod telemetry;

pub use adapters::Rp5ProviderAdapter;
pub use config::{AppConfig, HttpConfig, StorageConfig};
pub use http::HttpPageSource;
pub use persistence::{LocationStoreError, TomlLocationStore};
pub use retry::{RetryConfig, Retryable, with_retry};
pub use telemetry::{build_recorder, init_logging, install_metrics, log_filter};
