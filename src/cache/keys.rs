// Cache key generation
// Author: kelexine (https://github.com/kelexine)

use crate::models::ContentfulRequest;
use sha2::{Digest, Sha256};

/// Generate the cache key for `request` under `prefix`.
///
/// The key is `"{prefix}-{sha256}"`, hashing the query and its variables.
/// Variables live in a `BTreeMap`, so the same inputs always yield the
/// same key regardless of insertion order.
pub fn generate_key(prefix: &str, request: &ContentfulRequest) -> String {
    let mut hasher = Sha256::new();

    hasher.update(request.query.as_bytes());
    // Separator so "ab"+"c" and "a"+"bc" hash differently
    hasher.update([0u8]);
    hasher.update(serde_json::to_string(&request.variables).unwrap_or_default().as_bytes());

    format!("{}-{:x}", prefix, hasher.finalize())
}
