//! Adoption store - the seam route handlers depend on
//!
//! `PgAdoptionStore` leases one connection per call from the
//! `ConnectionProvider` and runs the repository on it. The lease is dropped
//! when the call returns, whatever the outcome.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::db::pool::ConnectionProvider;
use crate::db::repos::{AdoptionRecord, AdoptionRepo, DbError};
use crate::db::schema;
use crate::models::NewAdoption;

/// Persistence operations for adoption requests
#[async_trait]
pub trait AdoptionStore: Send + Sync {
    /// Persist one adoption and return the stored record.
    async fn insert(&self, adoption: &NewAdoption) -> Result<AdoptionRecord, DbError>;

    /// All adoptions, newest first.
    async fn list(&self) -> Result<Vec<AdoptionRecord>, DbError>;

    /// Check that the backing database answers.
    async fn ping(&self) -> Result<(), DbError>;
}

/// PostgreSQL-backed store
///
/// The adoptions table is created on the first call that reaches the
/// database. A failed attempt leaves the cell empty, so the next call tries
/// again.
#[derive(Debug, Clone)]
pub struct PgAdoptionStore {
    provider: ConnectionProvider,
    schema: Arc<OnceCell<()>>,
}

impl PgAdoptionStore {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self {
            provider,
            schema: Arc::new(OnceCell::new()),
        }
    }

    /// Create the adoptions table if missing.
    pub async fn ensure_schema(&self) -> Result<(), DbError> {
        self.schema
            .get_or_try_init(|| async {
                let mut conn = self.provider.acquire().await?;
                schema::ensure(&mut conn).await
            })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl AdoptionStore for PgAdoptionStore {
    async fn insert(&self, adoption: &NewAdoption) -> Result<AdoptionRecord, DbError> {
        self.ensure_schema().await?;
        let mut conn = self.provider.acquire().await?;
        AdoptionRepo::new(&mut conn).insert(adoption).await
    }

    async fn list(&self) -> Result<Vec<AdoptionRecord>, DbError> {
        self.ensure_schema().await?;
        let mut conn = self.provider.acquire().await?;
        AdoptionRepo::new(&mut conn).list().await
    }

    async fn ping(&self) -> Result<(), DbError> {
        let mut conn = self.provider.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use sqlx::postgres::PgPoolOptions;
    use sqlx::Connection;

    use crate::config::DatabaseConfig;
    use crate::db::create_pool;

    #[tokio::test]
    async fn failed_schema_setup_is_retried() {
        let config = DatabaseConfig {
            host: "127.0.0.1".into(),
            port: 1,
            acquire_timeout: Duration::from_millis(300),
            ..Default::default()
        };
        let store = PgAdoptionStore::new(ConnectionProvider::new(create_pool(&config).unwrap()));

        assert!(matches!(store.list().await, Err(DbError::Connection(_))));
        assert!(store.schema.get().is_none());
        assert!(matches!(store.list().await, Err(DbError::Connection(_))));
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -p petadopt-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn table_is_created_on_first_use() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let config = DatabaseConfig {
            url: Some(url),
            ..Default::default()
        };
        let base = config.connect_options().unwrap();

        // Fresh schema so the table is guaranteed absent
        let schema_name = format!("petadopt_lazy_{}", std::process::id());
        let mut admin = sqlx::PgConnection::connect_with(&base).await.unwrap();
        sqlx::query(&format!("DROP SCHEMA IF EXISTS {schema_name} CASCADE"))
            .execute(&mut admin)
            .await
            .unwrap();
        sqlx::query(&format!("CREATE SCHEMA {schema_name}"))
            .execute(&mut admin)
            .await
            .unwrap();

        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect_lazy_with(base.options([("search_path", schema_name.as_str())]));
        let store = PgAdoptionStore::new(ConnectionProvider::new(pool));

        // No ensure_schema call before use
        let records = store.list().await.expect("list on fresh schema");
        assert!(records.is_empty());

        sqlx::query(&format!("DROP SCHEMA {schema_name} CASCADE"))
            .execute(&mut admin)
            .await
            .unwrap();
    }
}
