//! Adoption repository
//!
//! Records are append-only: there is an insert and a newest-first listing,
//! nothing updates or deletes.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};

use crate::models::NewAdoption;

/// Adoption record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AdoptionRecord {
    pub id: i64,
    pub pet_type: String,
    pub quantity: i32,
    pub color: String,
    pub data_submitted: DateTime<Utc>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Pool exhausted or database unreachable
    #[error("connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Malformed statement or constraint violation
    #[error("query error: {0}")]
    Query(#[from] sqlx::Error),
}

/// Adoption repository over a leased connection
pub struct AdoptionRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> AdoptionRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert one adoption; the database assigns `id` and `data_submitted`.
    pub async fn insert(&mut self, adoption: &NewAdoption) -> Result<AdoptionRecord, DbError> {
        let record = sqlx::query_as::<_, AdoptionRecord>(
            r#"
            INSERT INTO adoptions (pet_type, quantity, color)
            VALUES ($1, $2, $3)
            RETURNING id, pet_type, quantity, color, data_submitted
            "#,
        )
        .bind(adoption.pet_type.as_str())
        .bind(adoption.quantity.as_i32())
        .bind(adoption.color.as_str())
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(record)
    }

    /// All adoptions, newest first.
    ///
    /// `id` breaks ties between rows committed within the same timestamp.
    pub async fn list(&mut self) -> Result<Vec<AdoptionRecord>, DbError> {
        let records = sqlx::query_as::<_, AdoptionRecord>(
            r#"
            SELECT id, pet_type, quantity, color, data_submitted
            FROM adoptions
            ORDER BY data_submitted DESC, id DESC
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(records)
    }

    /// Total number of stored adoptions.
    pub async fn count(&mut self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM adoptions")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }
}
