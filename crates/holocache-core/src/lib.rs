//! holocache-core - detail-record retrieval and caching for Star Wars API entities.
//!
//! The pipeline is fetch, normalize, cache, classify:
//!
//! - [`RecordFetcher`] checks a [`RecordCache`] and falls back to a [`Transport`]
//! - [`NormalizedRecord`] is the flattened, cache-ready form of a response
//! - [`completeness::classify`] flags records missing two or more required fields
//! - [`utils::format`] holds the `pretty` / `is_missing` display helpers

pub mod api;
pub mod cache;
pub mod completeness;
pub mod config;
pub mod fetcher;
pub mod models;
pub mod utils;

pub use api::{ApiClient, FetchError, Transport, TransportResponse};
pub use cache::{CacheKey, FileCache, MemoryCache, RecordCache};
pub use completeness::{classify, CompletenessVerdict, INCOMPLETE_THRESHOLD};
pub use config::Config;
pub use fetcher::RecordFetcher;
pub use models::{EntityType, NormalizedRecord, ParsedResponse, RawApiResponse};
