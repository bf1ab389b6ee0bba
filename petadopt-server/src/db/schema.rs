//! Table bootstrap for adoptions

use sqlx::PgConnection;

use crate::db::repos::DbError;

/// Create the adoptions table if it does not exist yet.
pub async fn ensure(conn: &mut PgConnection) -> Result<(), DbError> {
    tracing::info!("Ensuring adoptions table exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS adoptions (
            id BIGSERIAL PRIMARY KEY,
            pet_type TEXT NOT NULL,
            quantity INTEGER NOT NULL CHECK (quantity > 0),
            color TEXT NOT NULL,
            data_submitted TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_adoptions_submitted
        ON adoptions (data_submitted DESC, id DESC)
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}
