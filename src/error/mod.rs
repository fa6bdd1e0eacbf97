//! Error types for the reservation core.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type: infrastructure failures are wrapped
//! transparently, while the four domain variants (`NotFound`, `Invalid`,
//! `Conflict`, `Forbidden`) are the recoverable outcomes a caller is expected
//! to handle by correcting input or retrying with different parameters.

pub mod config;

use serde_json::Value;
use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the core. Most
/// infrastructure variants use `#[from]` for automatic conversion; the domain
/// variants carry caller-facing messages. None of the domain variants
/// represent an internal fault.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Referenced entity absent.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Malformed input, illegal state transition, range/ordering violation,
    /// or unsupported role.
    ///
    /// # Fields
    /// - `message` - Caller-facing description of what was invalid
    /// - `detail` - Machine-readable payload for client display, often
    ///   `Value::Null`; a window-miss carries the device's active windows
    #[error("{message}")]
    Invalid { message: String, detail: Value },

    /// Overlapping windows or reservations, or state already final.
    ///
    /// # Fields
    /// - `message` - Caller-facing description of the collision
    /// - `detail` - Machine-readable payload (offending window id, colliding
    ///   reservations, or the device's active windows)
    #[error("{message}")]
    Conflict { message: String, detail: Value },

    /// Ownership violation (e.g. cancelling someone else's reservation).
    ///
    /// # Fields
    /// - Message describing the denied action
    #[error("{0}")]
    Forbidden(String),
}

impl AppError {
    /// Builds an `Invalid` error without a detail payload.
    ///
    /// # Arguments
    /// - `message` - Caller-facing description of what was invalid
    ///
    /// # Returns
    /// - `AppError::Invalid` with a null detail
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
            detail: Value::Null,
        }
    }

    /// Builds an `Invalid` error carrying a detail payload.
    ///
    /// # Arguments
    /// - `message` - Caller-facing description of what was invalid
    /// - `detail` - Machine-readable payload for client display
    ///
    /// # Returns
    /// - `AppError::Invalid` carrying both pieces
    pub fn invalid_with(message: impl Into<String>, detail: Value) -> Self {
        Self::Invalid {
            message: message.into(),
            detail,
        }
    }

    /// Builds a `Conflict` error from a message and its detail payload.
    ///
    /// # Arguments
    /// - `message` - Caller-facing description of the collision
    /// - `detail` - Machine-readable payload for client display
    ///
    /// # Returns
    /// - `AppError::Conflict` carrying both pieces
    pub fn conflict(message: impl Into<String>, detail: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            detail,
        }
    }
}
