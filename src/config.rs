use serde::{Deserialize, Serialize};

/// Identifies which remote export a request (and its cached schema) belongs to.
///
/// `dataset_path` is the vendor-API-relative endpoint of the export and the
/// sole input to the cache key; `vendor_id` scopes the request to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub dataset_path: String,
    pub vendor_id: String,
}
