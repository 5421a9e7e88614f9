//! Service configuration - environment loading
//!
//! Configuration is read once at startup from environment variables:
//! - `DB_USER`: database user (optional, overrides the URL's user)
//! - `DB_PASSWORD`: database password (optional, overrides the URL's password)
//! - `DB_CONNECTION_STRING`: PostgreSQL URL, e.g. `postgres://db:5432/flights`
//! - `DB_MAX_CONNECTIONS`: pool size (default: 5)
//! - `HOST`: listen address (default: 0.0.0.0)
//! - `PORT`: listen port (default: 3000)

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: [u8; 4] = [0, 0, 0, 0];
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },

    #[error("invalid database connection string: {0}")]
    ConnectionString(#[source] sqlx::Error),
}

/// Immutable service configuration, built once and passed to the pool builder.
#[derive(Clone)]
pub struct ServiceConfig {
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub connection_string: String,
    pub max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
}

impl ServiceConfig {
    /// Create config from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let connection_string = non_empty("DB_CONNECTION_STRING")
            .ok_or(ConfigError::Missing("DB_CONNECTION_STRING"))?;

        Ok(Self {
            db_user: non_empty("DB_USER"),
            db_password: non_empty("DB_PASSWORD"),
            connection_string,
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                non_empty("DB_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
            host: parse_or("HOST", non_empty("HOST"), IpAddr::from(DEFAULT_HOST))?,
            port: parse_or("PORT", non_empty("PORT"), DEFAULT_PORT)?,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Build sqlx connect options, layering explicit credentials over the URL.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let mut options = PgConnectOptions::from_str(&self.connection_string)
            .map_err(ConfigError::ConnectionString)?;

        if let Some(user) = &self.db_user {
            options = options.username(user);
        }
        if let Some(password) = &self.db_password {
            options = options.password(password);
        }

        Ok(options)
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("db_user", &self.db_user)
            .field("db_password", &self.db_password.as_ref().map(|_| "<redacted>"))
            .field("connection_string", &self.connection_string)
            .field("max_connections", &self.max_connections)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            db_user: None,
            db_password: None,
            connection_string: "postgres://localhost/flightdesk".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            host: IpAddr::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}
