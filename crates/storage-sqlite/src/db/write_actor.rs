use super::DbPool;
use crate::errors::{IntoCore, StorageError};
use diesel::SqliteConnection;
use log::debug;
use promocode_factory_core::errors::{DatabaseError, Error, Result};
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A write job runs against the writer's connection and returns a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

// Job results are type-erased on the channel and downcast in `exec`.
type AnyResult = Result<Box<dyn Any + Send + 'static>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(Job<Box<dyn Any + Send + 'static>>, oneshot::Sender<AnyResult>)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// Every job runs inside its own immediate transaction, so a job either
    /// commits completely or not at all.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| writer_stopped())?;

        let boxed = ret_rx.await.map_err(|_| writer_stopped())??;
        boxed
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| Error::Unexpected("Failed to downcast writer actor result".to_string()))
    }
}

fn writer_stopped() -> Error {
    Error::Database(DatabaseError::Internal(
        "Database writer is no longer running".to_string(),
    ))
}

/// Spawns a background Tokio task that acts as the single writer to the database.
///
/// The actor owns one connection taken from the pool for its whole lifetime
/// and processes write jobs serially. Fails if no connection can be acquired.
pub fn spawn_writer(pool: DbPool) -> Result<WriteHandle> {
    let mut conn = pool.get().into_core()?;
    let (tx, mut rx) = mpsc::channel::<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<AnyResult>,
    )>(1024);

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result: AnyResult = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(|e: StorageError| {
                    debug!("Write transaction rolled back: {}", e);
                    Error::from(e)
                });

            // The requester may have gone away; nothing to do then.
            let _ = reply_tx.send(result);
        }
        debug!("All write handles dropped, stopping database writer");
    });

    Ok(WriteHandle { tx })
}
