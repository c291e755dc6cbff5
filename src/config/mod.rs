use std::env;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid DATABASE_URL: {0}")]
    InvalidDatabaseUrl(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    /// Connection target for the backing document database.
    pub database_url: Url,
    pub port: u16,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connection_timeout: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        let raw = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let database_url =
            Url::parse(&raw).map_err(|e| ConfigError::InvalidDatabaseUrl(e.to_string()))?;

        let port = env::var("PULSE_API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(3000);

        Ok(Self {
            environment,
            database_url,
            port,
            database: DatabaseConfig::defaults_for(environment).with_env_overrides(),
        })
    }
}

impl DatabaseConfig {
    /// Pool sizing defaults per environment, overridable with specific env vars.
    fn defaults_for(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self {
                max_connections: 10,
                connection_timeout: 30,
            },
            Environment::Staging => Self {
                max_connections: 20,
                connection_timeout: 10,
            },
            Environment::Production => Self {
                max_connections: 50,
                connection_timeout: 5,
            },
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.max_connections = v.parse().unwrap_or(self.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.connection_timeout = v.parse().unwrap_or(self.connection_timeout);
        }
        self
    }
}
