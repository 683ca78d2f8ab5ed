//! Composite cache key generation.

use sha2::{Digest, Sha256};

/// Compute the cache key for a request: a SHA-256 digest over the resolved
/// endpoint (path plus query string) and the serialized request options.
pub fn compute_cache_key(endpoint: &str, options: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(endpoint.as_bytes());
    hasher.update(b"\n");
    hasher.update(options.as_bytes());
    hex::encode(hasher.finalize())
}
