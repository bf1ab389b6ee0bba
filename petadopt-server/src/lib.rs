//! petadopt-server: HTTP server for pet adoption requests
//!
//! Serves an adoption form, persists confirmed requests to PostgreSQL and
//! renders the submission history newest-first.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod render;

pub use config::DatabaseConfig;
pub use http::{run_server, AppState, ServerConfig};
