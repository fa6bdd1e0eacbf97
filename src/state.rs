//! Shared resources handed to whatever transport embeds the core.
//!
//! `AppState` is built once at startup and cloned per request by the
//! embedding layer. Services borrow the connection and cache out of it
//! rather than owning them.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::cache::Cache;

/// Handle to the resources every operation needs.
///
/// Cloning is cheap: `DatabaseConnection` is a pool handle and the cache
/// sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Pool of connections to the reservation database.
    pub db: DatabaseConnection,

    /// Cache collaborator used for invalidation signalling.
    ///
    /// The core treats this as pure optimization; every operation stays
    /// correct with a no-op implementation plugged in.
    pub cache: Arc<dyn Cache>,
}

impl AppState {
    /// Bundles the startup-initialized resources into a state handle.
    ///
    /// # Arguments
    /// - `db` - Connected database pool
    /// - `cache` - Cache implementation, real or no-op
    ///
    /// # Returns
    /// - `AppState` - Ready to be cloned into the embedding transport
    pub fn new(db: DatabaseConnection, cache: Arc<dyn Cache>) -> Self {
        Self { db, cache }
    }
}
