//! Cache collaborator interface and implementations.
//!
//! The core treats the cache as pure optimization: every operation must stay
//! correct with the cache entirely disabled. Services only ever call the
//! invalidation half (`delete`, `delete_prefix`) after writes; the read-through
//! half (`get`, `set`) is exposed for the transport layer that serves list and
//! detail requests. Cache failures are handled inside each implementation and
//! never propagate to the caller.
//!
//! Keys are built from the structured [`CacheKey`] and [`CacheFamily`] types
//! rather than ad-hoc string concatenation, so filter values can never collide
//! with key separators.

pub mod memory;
pub mod noop;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

pub use memory::MemoryCache;
pub use noop::NoopCache;

/// Time-to-live for single-record detail entries.
pub const DETAIL_TTL: Duration = Duration::from_secs(600);

/// Time-to-live for filtered list pages.
pub const LIST_TTL: Duration = Duration::from_secs(300);

/// Time-to-live for per-equipment window lists, which change rarely.
pub const WINDOW_LIST_TTL: Duration = Duration::from_secs(3600);

/// Key for a single cached entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKey {
    /// Detail entry of one piece of equipment.
    EquipmentDetail(i32),
    /// Ordered window list of one piece of equipment.
    WindowList(i32),
    /// Detail entry of one reservation.
    ReservationDetail(i32),
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EquipmentDetail(id) => write!(f, "equipment:detail:{}", id),
            Self::WindowList(id) => write!(f, "equipment:{}:windows", id),
            Self::ReservationDetail(id) => write!(f, "reservation:detail:{}", id),
        }
    }
}

/// Prefix identifying a family of keys that are invalidated together.
///
/// List pages are keyed by their filter values below these prefixes, so a
/// write cannot know which concrete pages exist; it drops the whole family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheFamily {
    /// All filtered equipment list pages.
    EquipmentLists,
    /// All reservation list pages, the per-requester own-list families and
    /// the admin list family alike.
    ReservationLists,
}

impl fmt::Display for CacheFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EquipmentLists => write!(f, "equipment:list"),
            Self::ReservationLists => write!(f, "reservation:list"),
        }
    }
}

/// Key/value cache with per-entry TTL.
///
/// Implementations own their failure handling: a broken cache logs and
/// degrades to a miss, it never returns an error to the core.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Fetches a live entry, or `None` on miss or expiry.
    async fn get(&self, key: &str) -> Option<String>;

    /// Stores an entry that expires after `ttl`.
    async fn set(&self, key: &str, value: String, ttl: Duration);

    /// Drops one entry. Absent keys are a no-op.
    async fn delete(&self, key: &str);

    /// Drops every entry whose key starts with `prefix`.
    async fn delete_prefix(&self, prefix: &str);
}
