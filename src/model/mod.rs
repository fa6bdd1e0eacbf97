//! Domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer,
//! representing business entities and operation parameters. Domain models are
//! converted from entity models at the repository boundary; the embedding
//! transport converts them to whatever DTO shape it exposes. They provide
//! type-safe representations with business logic separated from database and
//! API concerns.

pub mod equipment;
pub mod reservation;
pub mod time_window;
