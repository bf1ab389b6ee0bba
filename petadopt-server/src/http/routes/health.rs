//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// GET /health
///
/// Always 200; a down database is reported in the body, not the status.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.store.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!("Health check: database unavailable: {}", e);
            "unavailable"
        }
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::db::store::memory::MemoryStore;
    use crate::render::Templates;

    fn state(store: MemoryStore) -> State<AppState> {
        State(AppState::new(Arc::new(store), Templates::load().unwrap()))
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let Json(body) = health(state(MemoryStore::default())).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "ok");
    }

    #[tokio::test]
    async fn health_reports_database_down() {
        let Json(body) = health(state(MemoryStore::failing())).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "unavailable");
    }
}
