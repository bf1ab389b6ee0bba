//! Repository implementations for database access
//!
//! Repositories borrow a leased connection; they never own the pool.

pub mod adoptions;

pub use adoptions::{AdoptionRecord, AdoptionRepo, DbError};
