//! HTTP transport for the Star Wars API.
//!
//! The fetcher only needs "GET this URL, give me status and body", which is
//! the [`Transport`] trait. [`ApiClient`] implements it on top of `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;

use super::FetchError;
use crate::models::EntityType;

// ============================================================================
// Constants
// ============================================================================

/// Base URL for the detail endpoints
pub const DEFAULT_BASE_URL: &str = "https://www.swapi.tech/api";

/// HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Status and body of a completed request. Non-2xx statuses are returned
/// here, not as errors; only connection-level failures are `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError>;
}

/// Build `<base>/<subresource>/<id>` for a record.
pub fn record_url(base_url: &str, kind: EntityType, id: &str) -> String {
    format!("{}/{}/{}", base_url.trim_end_matches('/'), kind.subresource(), id)
}

/// API client for the Star Wars API.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// Create a new API client with the default timeout
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError> {
        debug!(url = url, "GET");
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
