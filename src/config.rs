use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:hbnb_dev.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub database_url: String,
    pub port: u16,
}

/// Deployment mode selected by the `ENV` variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    /// Any unrecognised value. Bootstrap performs no initialization for it.
    Other(String),
}

impl Environment {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "development" => Environment::Development,
            "production" => Environment::Production,
            other => Environment::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
            Environment::Other(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let environment = Environment::parse(
            env_map
                .get("ENV")
                .map(|s| s.as_str())
                .unwrap_or("development"),
        );

        let database_url = env_map
            .get("DATABASE_URL")
            .cloned()
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if database_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "DATABASE_URL".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("5000")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        Ok(Config {
            environment,
            database_url,
            port,
        })
    }
}
