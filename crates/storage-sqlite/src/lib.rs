//! SQLite storage implementation for the PromoCode Factory.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository trait defined in `promocode-factory-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The partner repository
//! - Database-specific model types (with Diesel derives)
//!
//! This is the only crate in the workspace where Diesel dependencies exist.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod partners;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};
