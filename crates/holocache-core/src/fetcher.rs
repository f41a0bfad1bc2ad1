//! Record fetch orchestration: cache first, then one remote read.
//!
//! A fetch is `check cache -> [miss] GET -> parse -> validate -> save -> return`.
//! Cache hits are returned unconditionally with no network call. Every
//! failure after the cache check is terminal for that call and nothing is
//! written to the cache, so the caller can always retry later.
//!
//! Concurrent fetches of one key are not deduplicated; each misses and hits
//! the network, and the last save wins.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::client::{record_url, DEFAULT_BASE_URL};
use crate::api::{FetchError, Transport};
use crate::cache::{CacheKey, RecordCache};
use crate::models::{EntityType, NormalizedRecord, ParsedResponse};

pub struct RecordFetcher {
    cache: Arc<dyn RecordCache>,
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl RecordFetcher {
    pub fn new(cache: Arc<dyn RecordCache>, transport: Arc<dyn Transport>) -> Self {
        Self {
            cache,
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one record by type name and id.
    ///
    /// The cache is consulted before the type is validated, so a key written
    /// by some other process is honored even for a type this crate does not map.
    pub async fn fetch_record(
        &self,
        type_name: &str,
        id: &str,
    ) -> Result<NormalizedRecord, FetchError> {
        let key = CacheKey::new(type_name, id);

        if let Some(record) = self.cache.read(&key) {
            debug!(key = %key, "Cache hit");
            return Ok(record);
        }
        debug!(key = %key, "Cache miss");

        let kind = EntityType::parse(type_name)
            .ok_or_else(|| FetchError::InvalidType(type_name.to_string()))?;

        let url = record_url(&self.base_url, kind, id);
        let response = self.transport.get(&url).await?;

        if !response.is_success() {
            debug!(
                url = %url,
                status = response.status,
                body = %FetchError::truncate_body(&response.body),
                "Remote returned error status"
            );
            return Err(FetchError::from_status(response.status));
        }

        let properties = match ParsedResponse::from_body(&response.body) {
            ParsedResponse::Valid(properties) => properties,
            ParsedResponse::Malformed(reason) => {
                warn!(url = %url, reason = %reason, "Rejected malformed response");
                return Err(FetchError::MalformedResponse(reason));
            }
        };

        let record = NormalizedRecord::from_properties(properties);

        if let Err(e) = self.cache.save(&key, &record) {
            warn!(key = %key, error = %e, "Failed to cache record");
        }

        Ok(record)
    }
}
