//! Database connection management and health probing.

pub mod postgres;

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use ch_core::errors::DomainError;
use ch_core::repositories::HealthProbe;
use ch_shared::config::DatabaseConfig;

/// Build the PostgreSQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await
}

/// Health probe that round-trips a `SELECT 1` through the pool
pub struct PgHealthProbe {
    pool: PgPool,
}

impl PgHealthProbe {
    /// Create a new probe over an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthProbe for PgHealthProbe {
    async fn ping(&self) -> Result<(), DomainError> {
        let row: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("health check failed: {e}")))?;

        if row.0 == 1 {
            Ok(())
        } else {
            Err(DomainError::Database(
                "database is not configured correctly".to_string(),
            ))
        }
    }
}
