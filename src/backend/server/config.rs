/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration,
 * and connecting to the optional PostgreSQL database.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by the binary first), with defaults suited to local development:
 *
 * - `DATABASE_URL` - PostgreSQL URL, unset for the in-memory store
 * - `SERVER_HOST` - bind address, default `0.0.0.0`
 * - `SERVER_PORT` - bind port, default `3000`
 * - `BCRYPT_COST` - bcrypt work factor (4-31), default `12`
 *
 * # Error Handling
 *
 * Malformed values, including a `DATABASE_URL` that is not a PostgreSQL URL,
 * are a `ConfigError` and stop start-up. The pool itself connects lazily: a
 * database that is down at start-up only fails the requests that need it,
 * and the pool reconnects once it is back.
 */

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;
const DATABASE_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get("DATABASE_URL") {
            connect_options(&url)?;
            config.database_url = Some(url);
        }

        if let Some(value) = get("SERVER_HOST") {
            config.host = parse("SERVER_HOST", &value)?;
        }

        if let Some(value) = get("SERVER_PORT") {
            config.port = parse("SERVER_PORT", &value)?;
        }

        if let Some(value) = get("BCRYPT_COST") {
            let cost: u32 = parse("BCRYPT_COST", &value)?;
            if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
                return Err(ConfigError::Invalid {
                    key: "BCRYPT_COST",
                    value,
                    reason: format!("must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}"),
                });
            }
            config.bcrypt_cost = cost;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn connect_options(database_url: &str) -> Result<PgConnectOptions, ConfigError> {
    database_url.parse().map_err(|e: sqlx::Error| ConfigError::Invalid {
        key: "DATABASE_URL",
        // the URL may carry a password
        value: "<redacted>".to_string(),
        reason: e.to_string(),
    })
}

/// Build the PostgreSQL pool and run migrations
///
/// The pool is created lazily, so an unreachable server does not stop
/// start-up. Requests that need a connection fail until it comes back.
///
/// # Errors
///
/// `ConfigError` if `database_url` is not a valid PostgreSQL URL.
///
/// Migration failures are logged but do not discard the pool; the schema may
/// already be in place.
pub async fn load_database(database_url: &str) -> Result<PgPool, ConfigError> {
    let options = connect_options(database_url)?;
    let pool = PgPoolOptions::new()
        .acquire_timeout(DATABASE_ACQUIRE_TIMEOUT)
        .connect_lazy_with(options);

    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(()) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to run database migrations");
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(pool)
}
