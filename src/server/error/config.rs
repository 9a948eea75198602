use thiserror::Error;

/// Startup configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset.
    ///
    /// The server needs `DATABASE_URL`; `SERVER_ADDR` is optional. See `.env.example`.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
