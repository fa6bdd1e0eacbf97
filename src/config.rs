use crate::error::{config::ConfigError, AppError};

/// Runtime configuration, read once at startup.
pub struct Config {
    /// Connection string for the reservation database.
    pub database_url: String,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// Only `DATABASE_URL` is required; transports embedding the core carry
    /// their own settings.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        Ok(Self { database_url })
    }
}
