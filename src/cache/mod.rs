// Cache capability consumed by the client
// Author: kelexine (https://github.com/kelexine)

mod keys;
pub mod models;

pub use keys::generate_key;
pub use models::{CacheItem, CachePayload, CacheStats};

use crate::error::Result;
use crate::models::ContentfulRequest;
use async_trait::async_trait;

/// A cache backend the client can read from and populate.
///
/// The client never stores anything itself: implement this over Redis, a
/// database table, an in-process map, or whatever else fits. Backends should
/// report failures as `ContentfulError::Cache`.
#[async_trait]
pub trait ContentfulCacher: Send + Sync {
    /// Derive the key for `request` under `prefix`. Must be pure.
    fn generate_key(&self, prefix: &str, request: &ContentfulRequest) -> String {
        generate_key(prefix, request)
    }

    /// Look up `key`. `Ok(None)` means the key is not cached; `Err` means the
    /// backend itself failed.
    async fn get(&self, key: &str) -> Result<Option<CachePayload>>;

    /// Store `payload` under `key`, replacing any previous value.
    async fn put(&self, key: &str, payload: CachePayload) -> Result<()>;
}
