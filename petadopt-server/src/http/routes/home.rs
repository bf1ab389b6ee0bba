//! Home page

use axum::{extract::State, response::Html, routing::get, Router};
use minijinja::context;

use crate::http::error::AppError;
use crate::http::server::AppState;
use crate::render;

/// GET / - the adoption form
async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    tracing::debug!("Rendering home page");
    let html = state.templates.render(render::HOME, context! {})?;
    Ok(Html(html))
}

/// Home routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
