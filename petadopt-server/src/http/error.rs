//! Handler error type with IntoResponse
//!
//! Client mistakes get a 400 with the validation message. Everything else is
//! logged and answered with a fixed 500 message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// Body of every 500 response
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// Handler error with automatic HTTP status mapping
#[derive(Debug)]
pub enum AppError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Connection or query failure (500, logged)
    Database(DbError),

    /// Template failed to render (500, logged)
    Render(minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(e) => {
                tracing::warn!("Rejected adoption request: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }
            Self::Render(e) => {
                tracing::error!("Template error: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for AppError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

impl From<minijinja::Error> for AppError {
    fn from(e: minijinja::Error) -> Self {
        Self::Render(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_400_with_message() {
        let err = AppError::Validation(ValidationError::Empty { field: "color" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"color cannot be empty");
    }

    #[tokio::test]
    async fn database_error_is_generic_500() {
        let err = AppError::Database(DbError::Connection(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], INTERNAL_ERROR_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn render_error_is_500() {
        let err = AppError::Render(minijinja::Error::new(
            minijinja::ErrorKind::TemplateNotFound,
            "missing.html",
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
