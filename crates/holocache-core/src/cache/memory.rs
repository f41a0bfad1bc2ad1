use std::collections::HashMap;
use std::sync::Mutex;

use super::{CacheKey, RecordCache};
use crate::models::NormalizedRecord;

/// Process-local record cache. Writes are serialized by a mutex.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<CacheKey, NormalizedRecord>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries
            .lock()
            .map(|e| e.contains_key(key))
            .unwrap_or(false)
    }
}

impl RecordCache for MemoryCache {
    fn read(&self, key: &CacheKey) -> Option<NormalizedRecord> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn save(&self, key: &CacheKey, record: &NormalizedRecord) -> anyhow::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory cache lock poisoned"))?;
        entries.insert(key.clone(), record.clone());
        Ok(())
    }

    fn remove(&self, key: &CacheKey) -> anyhow::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory cache lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_and_remove() {
        let cache = MemoryCache::new();
        let key = CacheKey::new("planet", "1");
        let record = NormalizedRecord::from_properties(
            json!({"name": "Tatooine", "climate": "arid"}).as_object().cloned().unwrap(),
        );

        assert!(cache.is_empty());
        assert_eq!(cache.read(&key), None);

        cache.save(&key, &record).unwrap();
        assert!(cache.contains(&key));
        assert_eq!(cache.read(&key), Some(record));

        cache.remove(&key).unwrap();
        assert!(cache.is_empty());
    }
}
