use sea_orm::DbErr;
use thiserror::Error;

/// Errors that can occur while assembling a test environment.
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create schema.
    #[error("test database error: {0}")]
    Database(#[from] DbErr),
}
