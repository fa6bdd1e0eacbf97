//! No-op cache implementation.

use std::time::Duration;

use async_trait::async_trait;

use crate::cache::Cache;

/// Cache that stores nothing and always misses.
///
/// The core is specified to stay correct with caching disabled; wiring this
/// implementation in is how tests and cache-less deployments hold it to that.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCache;

#[async_trait]
impl Cache for NoopCache {
    async fn get(&self, _key: &str) -> Option<String> {
        None
    }

    async fn set(&self, _key: &str, _value: String, _ttl: Duration) {}

    async fn delete(&self, _key: &str) {}

    async fn delete_prefix(&self, _prefix: &str) {}
}
