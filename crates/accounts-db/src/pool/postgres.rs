//! PostgreSQL connection pool management

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

/// DDL for the `users` and `tokens` tables
pub const SCHEMA: &str = include_str!("../../schema.sql");

/// Pool sizing and connection lifetimes
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// How long `acquire` waits before failing
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    /// Pool settings for `url` with the default sizing and timeouts
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
    }
}

impl From<&accounts_common::DatabaseConfig> for DatabaseConfig {
    fn from(config: &accounts_common::DatabaseConfig) -> Self {
        Self {
            max_connections: config.max_connections,
            min_connections: config.min_connections,
            ..Self::new(config.url.clone())
        }
    }
}

/// Open a pool against `config.url`
#[instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    config.pool_options().connect(&config.url).await
}

/// Create the `users` and `tokens` tables if they do not exist yet
#[instrument(skip(pool))]
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("Database schema applied");
    Ok(())
}
