use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use super::{CacheKey, RecordCache};
use crate::models::NormalizedRecord;

/// Extension for cache entry files.
const ENTRY_EXTENSION: &str = "json";

/// Distinguishes temporary files of concurrent writers within one process.
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    pub data: T,
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    pub fn age_minutes(&self) -> i64 {
        let now = Utc::now();
        (now - self.cached_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            // Also covers clock skew
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / 1440)
        }
    }
}

/// Record cache persisted as one JSON file per key.
pub struct FileCache {
    cache_dir: PathBuf,
}

impl FileCache {
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache directory {}", cache_dir.display()))?;
        Ok(Self { cache_dir })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn cache_path(&self, key: &CacheKey) -> PathBuf {
        self.cache_dir
            .join(format!("{}.{}", key.as_str(), ENTRY_EXTENSION))
    }

    fn load<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<Option<CachedData<T>>> {
        let path = self.cache_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache file: {}", key))?;

        let cached: CachedData<T> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache file: {}", key))?;

        Ok(Some(cached))
    }

    /// Load an entry, logging and swallowing read/parse errors.
    fn load_entry(&self, key: &CacheKey) -> Option<CachedData<NormalizedRecord>> {
        match self.load(key) {
            Ok(cached) => cached,
            Err(e) => {
                debug!(key = %key, error = %e, "Ignoring unreadable cache entry");
                None
            }
        }
    }

    /// Write to a temporary file then rename over the entry, so a reader
    /// never sees a partially written file.
    fn store<T: Serialize>(&self, key: &CacheKey, data: &T) -> Result<()> {
        let cached = CachedData::new(data);
        let contents = serde_json::to_string_pretty(&cached)?;

        let path = self.cache_path(key);
        let tmp = self.cache_dir.join(format!(
            "{}.{}.{}.tmp",
            key.as_str(),
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::write(&tmp, contents)
            .with_context(|| format!("Failed to write cache file: {}", key))?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e).with_context(|| format!("Failed to replace cache file: {}", key));
        }
        Ok(())
    }

    /// Age of an entry for display, e.g. "5m ago".
    pub fn age_display(&self, key: &CacheKey) -> Option<String> {
        self.load_entry(key).map(|cached| cached.age_display())
    }

    /// Remove every cached entry. Returns the number of entries removed.
    pub fn clear(&self) -> Result<usize> {
        let mut removed = 0;
        for entry in std::fs::read_dir(&self.cache_dir)? {
            let path = entry?.path();
            let is_entry = path
                .extension()
                .map(|ext| ext == ENTRY_EXTENSION)
                .unwrap_or(false);
            if is_entry && path.is_file() {
                std::fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
                removed += 1;
            }
        }
        debug!(removed, dir = %self.cache_dir.display(), "Cleared record cache");
        Ok(removed)
    }
}

impl RecordCache for FileCache {
    fn read(&self, key: &CacheKey) -> Option<NormalizedRecord> {
        self.load_entry(key).map(|cached| cached.data)
    }

    fn save(&self, key: &CacheKey, record: &NormalizedRecord) -> Result<()> {
        self.store(key, record)
    }

    fn remove(&self, key: &CacheKey) -> Result<()> {
        let path = self.cache_path(key);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
