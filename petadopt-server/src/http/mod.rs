//! HTTP server layer
//!
//! Axum server with:
//! - HTML pages rendered from embedded templates
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::AppError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
