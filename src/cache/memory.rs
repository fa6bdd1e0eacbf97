//! In-process cache implementation backed by a hash map.
//!
//! Entries are stored with an absolute expiry instant and checked lazily on
//! read; writes sweep out whatever has expired so the map stays bounded by
//! the live working set.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::Cache;

/// Stored cache entry with expiration timestamp.
struct Entry {
    /// The cached payload.
    value: String,
    /// Timestamp when this entry expires.
    expires_at: Instant,
}

impl Entry {
    /// Checks if the entry has expired.
    ///
    /// # Returns
    /// - `true` - Entry has expired
    /// - `false` - Entry is still valid
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory key/value cache with per-entry TTL.
///
/// Suitable as the process-local default; a deployment fronted by several
/// workers would swap in a shared store behind the same trait.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    ///
    /// # Returns
    /// - `MemoryCache` - New cache with no entries
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone())
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) {
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| !entry.is_expired());
        entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    async fn delete(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    async fn delete_prefix(&self, prefix: &str) {
        self.entries
            .write()
            .await
            .retain(|key, _| !key.starts_with(prefix));
    }
}
