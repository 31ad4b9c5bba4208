/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration from
 * environment variables, and the optional PostgreSQL connection.
 *
 * # Configuration Sources
 *
 * | variable       | required | default |
 * |----------------|----------|---------|
 * | `JWT_SECRET`   | yes      |         |
 * | `DATABASE_URL` | no       | none    |
 * | `SERVER_PORT`  | no       | 3000    |
 * | `BCRYPT_COST`  | no       | 10      |
 *
 * The signing secret is checked here, once, so a running server always has
 * one. Without `DATABASE_URL` the server keeps users in memory.
 */

use std::net::SocketAddr;

use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::passwords::DEFAULT_COST;
use crate::backend::auth::sessions::SigningSecret;

const DEFAULT_PORT: u16 = 3000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HS256 signing secret for session tokens
    pub jwt_secret: SigningSecret,
    /// PostgreSQL URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Listen port
    pub port: u16,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Configuration with defaults for everything but the secret
    pub fn new(jwt_secret: SigningSecret) -> Self {
        Self {
            jwt_secret,
            database_url: None,
            port: DEFAULT_PORT,
            bcrypt_cost: DEFAULT_COST,
        }
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| ConfigError::MissingValue("JWT_SECRET"))?;
        let jwt_secret = SigningSecret::new(secret).map_err(|e| ConfigError::InvalidValue {
            name: "JWT_SECRET",
            reason: e.to_string(),
        })?;

        let mut config = Self::new(jwt_secret);

        if let Some(url) = non_empty_var("DATABASE_URL") {
            config = config.with_database_url(url);
        }

        if let Some(port) = non_empty_var("SERVER_PORT") {
            let port = port.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                reason: e.to_string(),
            })?;
            config = config.with_port(port);
        }

        if let Some(cost) = non_empty_var("BCRYPT_COST") {
            let cost = cost.parse::<u32>().map_err(|e| ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                reason: e.to_string(),
            })?;
            if !(4..=31).contains(&cost) {
                return Err(ConfigError::InvalidValue {
                    name: "BCRYPT_COST",
                    reason: format!("{cost} is outside 4..=31"),
                });
            }
            config = config.with_bcrypt_cost(cost);
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Connect to PostgreSQL and run migrations
///
/// A failed migration is logged and the server continues with the existing
/// schema; a failed connection is returned to the caller.
pub async fn load_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(pool)
}
