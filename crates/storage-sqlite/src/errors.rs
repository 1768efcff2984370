//! Storage-specific error types for SQLite operations.
//!
//! This module wraps Diesel and r2d2 errors and converts them to the
//! database-agnostic error types defined in `promocode_factory_core`.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use promocode_factory_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `promocode_factory_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    /// A core error raised inside a write job. Passed through unchanged.
    #[error("Core error: {0}")]
    CoreError(#[from] Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::NotFound) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                info,
            )) => Error::Database(DatabaseError::UniqueViolation(info.message().to_string())),
            StorageError::QueryFailed(DieselError::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation,
                info,
            )) => Error::Database(DatabaseError::ForeignKeyViolation(
                info.message().to_string(),
            )),
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::MigrationFailed(e) => Error::Database(DatabaseError::MigrationFailed(e)),
            StorageError::CorruptRow(e) => Error::Database(DatabaseError::Internal(e)),
            StorageError::CoreError(e) => e,
        }
    }
}

/// Extension trait for converting Diesel and r2d2 Results to core Results.
///
/// Provides `.into_core()`, going through `StorageError`. A plain `From`
/// impl is not possible because of orphan rules.
pub trait IntoCore<T> {
    fn into_core(self) -> promocode_factory_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> promocode_factory_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> promocode_factory_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, diesel::ConnectionError> {
    fn into_core(self) -> promocode_factory_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
