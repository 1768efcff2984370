//! Core error types for the PromoCode Factory.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for partner and promo-code operations.
///
/// `NotFound`, `InvalidOperation` and `Validation` are expected business
/// outcomes the caller is meant to handle. Everything else is a failure of
/// a collaborator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// === From implementations for common error types ===

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}
