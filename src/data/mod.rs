//! Repository layer: every query, insert, update, and delete lives here.
//!
//! Each repository borrows a `ConnectionTrait` implementor, so the same
//! methods run against the pool or inside an open transaction. Repositories
//! speak SeaORM entities internally and hand domain models back out; the
//! service layer above never sees an `ActiveModel`.

pub mod equipment;
pub mod identity;
pub mod reservation;
pub mod time_window;
