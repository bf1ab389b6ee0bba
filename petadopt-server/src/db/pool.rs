//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and a bounded acquire
//! timeout, so an exhausted pool surfaces as an error instead of a hang.

use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};

use crate::config::DatabaseConfig;
use crate::db::repos::DbError;

/// Create a PostgreSQL connection pool.
///
/// The pool connects lazily: nothing touches the network until the first
/// acquire, so the server can start while the database is still down.
///
/// # Errors
///
/// Returns an error if the configured connection URL is malformed.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default())?;
/// ```
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options))
}

/// Hands out pooled connections to a single request at a time.
///
/// A leased `PoolConnection` goes back to the pool when dropped, on success
/// and error paths alike.
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    pool: PgPool,
}

impl ConnectionProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lease a connection from the pool.
    ///
    /// # Errors
    ///
    /// `DbError::Connection` when the database is unreachable or no
    /// connection frees up within the acquire timeout.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, DbError> {
        match self.pool.acquire().await {
            Ok(conn) => {
                tracing::debug!(
                    idle = self.pool.num_idle(),
                    size = self.pool.size(),
                    "Acquired database connection"
                );
                Ok(conn)
            }
            Err(e) => {
                tracing::error!("Error connecting to the database: {}", e);
                Err(DbError::Connection(e))
            }
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
