//! Short-lived cache of query results.
//!
//! Keys are the exact query text sent to the store. Entities are created,
//! updated, deleted and expire between blocks, so a hit may be stale by up
//! to the configured TTL.

use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use lru::LruCache;

use crate::config::CacheConfig;
use crate::store::EntityRecord;

struct CachedRows {
    records: Vec<EntityRecord>,
    fetched_at: Instant,
}

/// LRU map from query text to the rows the store returned for it.
pub(crate) struct ResultCache {
    rows: Mutex<LruCache<String, CachedRows>>,
    ttl: Duration,
}

impl ResultCache {
    pub(crate) fn new(config: &CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            rows: Mutex::new(LruCache::new(capacity)),
            ttl: config.ttl,
        }
    }

    /// Rows fetched for `query` within the TTL, if any.
    pub(crate) fn get(&self, query: &str) -> Option<Vec<EntityRecord>> {
        let mut rows = self.rows.lock().ok()?;
        let fresh = rows
            .get(query)
            .map(|cached| cached.fetched_at.elapsed() <= self.ttl)?;
        if !fresh {
            rows.pop(query);
            return None;
        }
        rows.get(query).map(|cached| cached.records.clone())
    }

    pub(crate) fn insert(&self, query: &str, records: Vec<EntityRecord>) {
        if let Ok(mut rows) = self.rows.lock() {
            rows.put(
                query.to_string(),
                CachedRows {
                    records,
                    fetched_at: Instant::now(),
                },
            );
        }
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(max_entries: usize, ttl: Duration) -> ResultCache {
        ResultCache::new(&CacheConfig { max_entries, ttl })
    }

    fn rows(keys: &[&str]) -> Vec<EntityRecord> {
        keys.iter().map(|k| EntityRecord::new(*k, Vec::new())).collect()
    }

    #[test]
    fn test_insert_then_get() {
        let cache = cache(10, Duration::from_secs(60));
        cache.insert("size > 10", rows(&["0x01"]));
        assert_eq!(cache.get("size > 10"), Some(rows(&["0x01"])));
        assert_eq!(cache.get("size > 11"), None);
    }

    #[test]
    fn test_keys_are_exact_query_text() {
        let cache = cache(10, Duration::from_secs(60));
        cache.insert("tag\" = \"a  b\"", rows(&["0x01"]));

        assert_eq!(cache.get("tag\" = \"a b\""), None);
        assert_eq!(cache.get("tag\" =  \"a  b\""), None);
        assert!(cache.get("tag\" = \"a  b\"").is_some());
    }

    #[test]
    fn test_expired_rows_dropped() {
        let cache = cache(10, Duration::from_millis(20));
        cache.insert("a = 1", rows(&["0x01"]));
        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(cache.get("a = 1"), None);
    }

    #[test]
    fn test_least_recently_used_evicted() {
        let cache = cache(2, Duration::from_secs(60));
        cache.insert("a = 1", rows(&["1"]));
        cache.insert("b = 2", rows(&["2"]));
        assert!(cache.get("a = 1").is_some());
        cache.insert("c = 3", rows(&["3"]));

        assert!(cache.get("b = 2").is_none());
        assert!(cache.get("a = 1").is_some());
        assert!(cache.get("c = 3").is_some());
    }

    #[test]
    fn test_zero_capacity_still_caches() {
        let cache = cache(0, Duration::from_secs(60));
        cache.insert("a = 1", rows(&["1"]));
        assert!(cache.get("a = 1").is_some());
    }
}
