//! Generic aggregate repository contract.
//!
//! Services depend on this trait only. Concrete storage lives in the
//! `storage-sqlite` crate, and tests provide in-memory fakes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::Result;

/// Lookup and persistence of a whole aggregate of type `T`.
#[async_trait]
pub trait RepositoryTrait<T>: Send + Sync
where
    T: Send + 'static,
{
    /// Loads every aggregate in the store.
    async fn get_all(&self) -> Result<Vec<T>>;

    /// Loads one aggregate by its ID.
    ///
    /// A missing aggregate is `Ok(None)`, not an error.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<T>>;

    /// Inserts a new aggregate.
    async fn add(&self, entity: T) -> Result<T>;

    /// Persists the full state of an existing aggregate.
    async fn update(&self, entity: T) -> Result<T>;
}
