//! Adoption endpoints
//!
//! - GET /adoptions: history, newest first
//! - POST /confirm: validate, store, redirect to the history
//! - POST /submit: echo the posted fields without storing them

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use minijinja::context;
use serde::Serialize;

use crate::db::repos::AdoptionRecord;
use crate::http::error::AppError;
use crate::http::server::AppState;
use crate::models::AdoptionForm;
use crate::render;

/// One row of the adoptions table
#[derive(Debug, Serialize)]
pub struct AdoptionView {
    pub pet_type: String,
    pub quantity: i32,
    pub color: String,
    pub submitted: String,
}

impl From<AdoptionRecord> for AdoptionView {
    fn from(r: AdoptionRecord) -> Self {
        Self {
            pet_type: r.pet_type,
            quantity: r.quantity,
            color: r.color,
            submitted: r.data_submitted.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

/// GET /adoptions - list all adoption requests
async fn list_adoptions(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let records = state.store.list().await?;
    tracing::debug!(count = records.len(), "Retrieved adoptions");

    let adoptions: Vec<AdoptionView> = records.into_iter().map(AdoptionView::from).collect();
    let html = state
        .templates
        .render(render::ADOPTIONS, context! { adoptions })?;

    Ok(Html(html))
}

/// POST /confirm - store an adoption request
async fn confirm_adoption(
    State(state): State<AppState>,
    Form(form): Form<AdoptionForm>,
) -> Result<Response, AppError> {
    let adoption = form.validate()?;
    let record = state.store.insert(&adoption).await?;

    tracing::info!(
        id = record.id,
        pet_type = %record.pet_type,
        quantity = record.quantity,
        color = %record.color,
        "Adoption request stored"
    );

    Ok(redirect_found("/adoptions"))
}

/// POST /submit - render the posted fields back, nothing is stored
///
/// Fields are echoed in posted order; a repeated key shows every value.
async fn submit_echo(
    State(state): State<AppState>,
    Form(data): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    tracing::debug!(fields = data.len(), "Echoing submitted form");
    let html = state.templates.render(render::ADOPTIONS, context! { data })?;
    Ok(Html(html))
}

/// 302 Found. axum's `Redirect::to` answers 303.
fn redirect_found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Adoption routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/adoptions", get(list_adoptions))
        .route("/confirm", post(confirm_adoption))
        .route("/submit", post(submit_echo))
}
