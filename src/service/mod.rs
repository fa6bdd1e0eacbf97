//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! transport (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and collaborators
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Handling multi-step operations that must commit atomically
//!
//! Services signal cache invalidation through the [`crate::cache::Cache`]
//! collaborator after every successful mutation; they never populate the
//! cache themselves.

pub mod equipment;
pub mod reservation;
pub mod time_window;

#[cfg(test)]
mod test;
