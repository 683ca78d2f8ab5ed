//! In-memory TTL cache for normalized CMS responses.
//!
//! Successful fetches are memoized per composite request key (see [`key`])
//! for a fixed time-to-live. Entries are replaced whole; an entry past its
//! TTL is evicted on read and never served. The cache is constructed
//! explicitly and injected into the client so tests get isolated instances.

pub mod key;

use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::content::Content;

#[derive(Debug)]
struct CacheEntry {
    value: Content,
    stored_at: Instant,
}

/// Thread-safe response cache with a single time-to-live for all entries.
#[derive(Debug)]
pub struct ContentCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl ContentCache {
    /// Create a cache whose entries stay fresh for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self { entries: DashMap::new(), ttl }
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the live entry for `key`, if any.
    ///
    /// An entry whose age has reached the TTL is removed and treated as a
    /// miss; staleness is judged purely by elapsed wall-clock time.
    pub fn get(&self, key: &str) -> Option<Content> {
        if let Some(entry) = self.entries.get(key) {
            if entry.stored_at.elapsed() < self.ttl {
                return Some(entry.value.clone());
            }
            drop(entry);
            self.entries.remove(key);
            tracing::trace!("evicted expired cache entry {key}");
        }
        None
    }

    /// Store `value` under `key`, replacing any previous entry whole.
    pub fn insert(&self, key: &str, value: Content) {
        self.entries.insert(key.to_string(), CacheEntry { value, stored_at: Instant::now() });
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Drop entries past their TTL, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        before - self.entries.len()
    }

    /// Number of stored entries, live or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
