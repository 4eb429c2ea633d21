// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_max_connections() -> u32 {
    16
}

impl AppConfig {
    /// Build configuration from environment variables. `DATABASE_URL` is
    /// required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
                ))
            })?,
            Err(_) => default_max_connections(),
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }
}
