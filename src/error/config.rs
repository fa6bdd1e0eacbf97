use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent.
    ///
    /// Carries the variable name so startup failures say exactly which
    /// setting is missing from the environment or `.env` file.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
}
