use anyhow::Result;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Key/value string store with backend-managed expiry.
///
/// The backend may be globally unavailable; callers must treat any error as a
/// cache miss rather than fail. Expired entries simply read as absent.
pub trait CacheBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: CacheBackend + ?Sized> CacheBackend for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        (**self).put(key, value)
    }
}

/// In-process TTL cache. Entries expire `ttl` after their last write; last
/// writer wins when invocations overlap on the same key.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, (String, Instant)>>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }
}

impl CacheBackend for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(key).and_then(|(value, written)| {
            if written.elapsed() < self.ttl {
                Some(value.clone())
            } else {
                None
            }
        }))
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), (value.to_string(), Instant::now()));
        Ok(())
    }
}
