use tracing::{debug, warn};

use super::types::ColumnSchema;
use crate::cache::CacheBackend;

/// Substituted for `/` when deriving a cache key. Multi-character, so dataset
/// paths differing only around a separator cannot collide the way plain
/// concatenation would.
const KEY_DELIM: &str = "::";

/// Deterministic cache key for a dataset path.
pub fn cache_key(dataset_path: &str) -> String {
    format!(
        "schema{}{}",
        KEY_DELIM,
        dataset_path.replace('/', KEY_DELIM)
    )
}

/// Read a cached schema. Backend failures and undecodable entries degrade to
/// a miss; the read path never fails because of the cache.
pub fn load(backend: &dyn CacheBackend, key: &str) -> Option<Vec<ColumnSchema>> {
    let text = match backend.get(key) {
        Ok(Some(t)) => t,
        Ok(None) => {
            debug!(key, "schema cache miss");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "schema cache unavailable; treating as miss");
            return None;
        }
    };

    match serde_json::from_str(&text) {
        Ok(schema) => {
            debug!(key, "schema cache hit");
            Some(schema)
        }
        Err(e) => {
            warn!(key, error = %e, "cached schema is corrupt; treating as miss");
            None
        }
    }
}

/// Write a schema to the cache, best effort. Failures are logged and
/// swallowed so a broken cache cannot interrupt the read path.
pub fn store(backend: &dyn CacheBackend, key: &str, schema: &[ColumnSchema]) {
    let text = match serde_json::to_string(schema) {
        Ok(t) => t,
        Err(e) => {
            warn!(key, error = %e, "could not encode schema for caching");
            return;
        }
    };

    if let Err(e) = backend.put(key, &text) {
        warn!(key, error = %e, "could not store schema in cache");
    }
}
