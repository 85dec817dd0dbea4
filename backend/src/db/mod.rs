//! Database connection and pool management
//!
//! The pool is created once at startup and handed to `AppState`; each
//! query acquires a connection and returns it when done.

use crate::config::DatabaseConfig;
use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Pool tuning for `create_pool_with_options`
pub struct PoolOptions {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,      // 10 minutes
            max_lifetime_secs: 1800,     // 30 minutes
        }
    }
}

/// Create a PostgreSQL connection pool from application configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let options = PoolOptions {
        max_connections: config.max_connections,
        ..Default::default()
    };
    create_pool_with_options(&config.url, &options).await
}

/// Create a PostgreSQL connection pool with custom tuning
async fn create_pool_with_options(url: &str, options: &PoolOptions) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(url)?
        .application_name("forecast-gateway");

    let pool = PgPoolOptions::new()
        .max_connections(options.max_connections)
        .min_connections(options.min_connections)
        .acquire_timeout(Duration::from_secs(options.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(options.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(options.max_lifetime_secs))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await?;

    info!(
        "Database pool created: max={}, min={}",
        options.max_connections, options.min_connections
    );

    Ok(pool)
}

/// Run database migrations (creates the `users` table)
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_options() {
        let options = PoolOptions::default();
        assert_eq!(options.max_connections, 10);
        assert_eq!(options.min_connections, 1);
        assert_eq!(options.acquire_timeout_secs, 30);
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let result = create_pool_with_options("not a url", &PoolOptions::default()).await;
        assert!(result.is_err());
    }
}
