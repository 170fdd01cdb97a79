//! Runtime configuration loaded from the environment.
//!
//! # Environment variables
//!
//! - `DATABASE_URL`: `PostgreSQL` connection string (required)
//! - `TASKDESK_DB_MAX_CONNECTIONS`: pool size (default: 10)
//! - `TASKDESK_LOG`: tracing filter directive (default: `info`)
//! - `TASKDESK_ADMIN_USERNAME`: bootstrap administrator username
//!   (default: `admin`)
//! - `TASKDESK_ADMIN_EMAIL`: bootstrap administrator email
//!   (default: `admin@example.com`)
//! - `TASKDESK_ADMIN_PASSWORD_HASH`: bootstrap administrator credential
//!   digest (optional)
//!
//! A `.env` file in the working directory is loaded first when present.

use std::env;
use thiserror::Error;

const DATABASE_URL: &str = "DATABASE_URL";
const DB_MAX_CONNECTIONS: &str = "TASKDESK_DB_MAX_CONNECTIONS";
const LOG_FILTER: &str = "TASKDESK_LOG";
const ADMIN_USERNAME: &str = "TASKDESK_ADMIN_USERNAME";
const ADMIN_EMAIL: &str = "TASKDESK_ADMIN_EMAIL";
const ADMIN_PASSWORD_HASH: &str = "TASKDESK_ADMIN_PASSWORD_HASH";

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    /// A variable holds an unusable value.
    #[error("{key} has invalid value {value:?}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskdeskConfig {
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Tracing filter directive.
    pub log_filter: String,
    /// First-administrator bootstrap settings.
    pub admin: AdminBootstrapConfig,
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

/// Settings for the first administrator account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminBootstrapConfig {
    /// Login name.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Credential digest produced by the authentication layer.
    pub password_hash: Option<String>,
}

impl TaskdeskConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env files are normal outside development.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let url = read(DATABASE_URL).ok_or(ConfigError::Missing(DATABASE_URL))?;
        let max_connections = match read(DB_MAX_CONNECTIONS) {
            Some(raw) => parse_pool_size(raw)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database: DatabaseConfig {
                url,
                max_connections,
            },
            log_filter: read(LOG_FILTER).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
            admin: AdminBootstrapConfig {
                username: read(ADMIN_USERNAME)
                    .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_owned()),
                email: read(ADMIN_EMAIL).unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_owned()),
                password_hash: read(ADMIN_PASSWORD_HASH),
            },
        })
    }
}

impl AdminBootstrapConfig {
    /// Returns the credential digest, which bootstrapping cannot do without.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when no digest was configured.
    pub fn require_password_hash(&self) -> Result<&str, ConfigError> {
        self.password_hash
            .as_deref()
            .ok_or(ConfigError::Missing(ADMIN_PASSWORD_HASH))
    }
}

fn parse_pool_size(raw: String) -> Result<u32, ConfigError> {
    match raw.parse::<u32>() {
        Ok(size) if size >= 1 => Ok(size),
        _ => Err(ConfigError::Invalid {
            key: DB_MAX_CONNECTIONS,
            value: raw,
        }),
    }
}
