//! HTTP server command
//!
//! Builds the connection pool and templates, probes the database once, then
//! runs the adoption server until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use petadopt_server::config::{DatabaseConfig, DEFAULT_MAX_CONNECTIONS};
use petadopt_server::db::{create_pool, ConnectionProvider, PgAdoptionStore};
use petadopt_server::render::Templates;
use petadopt_server::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "PETADOPT_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Full database URL (overrides the individual --db-* options)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "PETADOPT_DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "PETADOPT_DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "PETADOPT_DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "PETADOPT_DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "PETADOPT_DB_NAME", default_value = "pets")]
    pub db_name: String,

    /// Maximum pooled connections
    #[arg(long, env = "PETADOPT_DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds to wait for a free connection before failing a request
    #[arg(long, env = "PETADOPT_DB_ACQUIRE_TIMEOUT", default_value_t = 5)]
    pub acquire_timeout_secs: u64,
}

impl ServeArgs {
    fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database_url.clone(),
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.database_config();
    tracing::debug!(?db_config, "Database configuration");

    let pool = create_pool(&db_config).context("Invalid database configuration")?;
    let store = PgAdoptionStore::new(ConnectionProvider::new(pool));

    // The server comes up either way. Data routes answer 500 until the
    // database is reachable and retry the table setup on each call.
    match store.ensure_schema().await {
        Ok(()) => tracing::info!("Connected to the database"),
        Err(e) => tracing::warn!("Database not ready, continuing without it: {}", e),
    }

    let templates = Templates::load().context("Failed to load templates")?;
    let state = AppState::new(Arc::new(store), templates);

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
