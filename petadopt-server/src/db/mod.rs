//! Database layer - connection provider, schema and repositories
//!
//! # Design Principles
//!
//! - One pool, constructed at startup and injected; no global connection
//! - Connections are leased per operation and return to the pool on drop
//! - All values travel as bound parameters
//! - Handlers talk to `AdoptionStore`, never to sqlx directly

pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use pool::{create_pool, ConnectionProvider};
pub use repos::*;
pub use store::{AdoptionStore, PgAdoptionStore};
