//! Instrument-reservation backend core.
//!
//! This crate implements the reservation scheduling subsystem for university
//! laboratory equipment: recurring daily availability windows, conflict
//! detection against existing reservations, next-available computation over a
//! bounded horizon, and the reservation lifecycle state machine. Persistence
//! uses SeaORM; transport (HTTP routing, authentication) is deliberately out
//! of scope and consumes this crate as a library.
//!
//! # Architecture
//!
//! The crate follows a layered architecture with clear separation of concerns:
//!
//! - **Service Layer** (`service/`) - Business logic orchestration: validation,
//!   the reservation state machine, conflict checks, and availability
//!   computation
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model
//!   conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific
//!   parameter types
//! - **Error Layer** (`error/`) - Application error taxonomy
//! - **Collaborators** (`cache/`, `audit/`) - Interfaces the core signals but
//!   never depends on for correctness
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, cache)
//! - **Startup** (`startup`) - Database connection and migration
//! - **Utilities** (`util/`) - Time-of-day normalization, instant parsing, and
//!   interval arithmetic shared across services
//!
//! # Request Flow
//!
//! A typical reservation request flows through these layers:
//!
//! 1. The embedding transport resolves identity and calls a **Service**
//! 2. **Service** validates input, runs window and conflict checks, executes
//!    the state transition inside a transaction
//! 3. **Data** queries the database, converts entities to domain models
//! 4. **Service** refreshes derived availability and signals cache
//!    invalidation (both best-effort), then returns the domain model

pub mod audit;
pub mod cache;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
