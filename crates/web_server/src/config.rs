//! Process configuration, read once at startup and injected into handlers.

/// Error raised when required configuration is missing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
}

/// Application configuration assembled from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Secret key for the payment processor; required
    pub stripe_secret_key: String,
    /// Address the HTTP server binds to
    pub bind_addr: String,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    ///
    /// `STRIPE_SECRET_KEY` is required; the database URL and bind address
    /// fall back to local defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/dock_rental".to_string());

        let stripe_secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| ConfigError::MissingVar("STRIPE_SECRET_KEY"))?;

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(Self {
            database_url,
            stripe_secret_key,
            bind_addr,
        })
    }
}
