//! Local caching of normalized records.
//!
//! Records are stored under a [`CacheKey`] derived from the requested type
//! and id. The cache never expires entries; it only reads and overwrites
//! them. Anything outside this crate may clear it at any time, so a missing
//! or unreadable entry is always just a miss.
//!
//! - [`FileCache`]: one JSON file per key, survives restarts
//! - [`MemoryCache`]: process-local map, for tests and embedding

pub mod key;
pub mod manager;
pub mod memory;

use crate::models::NormalizedRecord;

pub use key::CacheKey;
pub use manager::{CachedData, FileCache};
pub use memory::MemoryCache;

/// Read/write store for normalized records.
///
/// `read` never fails: corrupt or missing entries are `None`. `save` overwrites
/// any existing entry; concurrent saves to one key resolve last-write-wins.
pub trait RecordCache: Send + Sync {
    fn read(&self, key: &CacheKey) -> Option<NormalizedRecord>;

    fn save(&self, key: &CacheKey, record: &NormalizedRecord) -> anyhow::Result<()>;

    fn remove(&self, key: &CacheKey) -> anyhow::Result<()>;
}
