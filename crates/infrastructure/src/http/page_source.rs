//! Page source over `reqwest`
//!
//! Fetches listing and city pages as text, retrying transient failures.

use application::{error::ApplicationError, ports::PageSourcePort};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    config::HttpConfig,
    retry::{RetryConfig, Retryable, with_retry},
};

/// Failure of a single fetch attempt
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or timed out
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {0}")]
    Status(StatusCode),

    /// The body could not be read as text
    #[error("failed to read body: {0}")]
    Body(#[source] reqwest::Error),
}

impl Retryable for FetchError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::Status(status) => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            },
            Self::Body(_) => true,
        }
    }
}

impl From<FetchError> for ApplicationError {
    fn from(err: FetchError) -> Self {
        Self::PageSource(err.to_string())
    }
}

/// Page source backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
    retry: RetryConfig,
}

impl HttpPageSource {
    /// Create a page source from HTTP settings
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the client cannot be built.
    pub fn new(config: &HttpConfig) -> Result<Self, ApplicationError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApplicationError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            retry: config.retry.clone(),
        })
    }

    /// Create a page source with default settings
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built.
    pub fn with_defaults() -> Result<Self, ApplicationError> {
        Self::new(&HttpConfig::default())
    }

    async fn fetch_once(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.text().await.map_err(FetchError::Body)
    }
}

#[async_trait]
impl PageSourcePort for HttpPageSource {
    #[instrument(skip(self))]
    async fn fetch_page(&self, url: &str) -> Result<String, ApplicationError> {
        let body = with_retry(&self.retry, || self.fetch_once(url)).await?;
        debug!(bytes = body.len(), "Fetched page");
        Ok(body)
    }
}
