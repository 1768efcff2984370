//! Connection pooling, initialization and migrations for the SQLite store.

use log::{error, info};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use diesel::connection::{Connection, SimpleConnection};
use diesel::r2d2::{self, ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::{IntoCore, StorageError};
use promocode_factory_core::errors::{DatabaseError, Error, Result};

pub mod write_actor;
pub use write_actor::{spawn_writer, WriteHandle};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Prepares the database file at `db_path` and returns the path in use.
///
/// Creates the parent directory when missing and switches the file to WAL
/// mode so readers do not block the single writer.
pub fn init(db_path: &str) -> Result<String> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.as_os_str().is_empty() && !db_dir.exists() {
            fs::create_dir_all(db_dir)?;
        }
    }

    let mut conn = SqliteConnection::establish(db_path).into_core()?;
    conn.batch_execute(
        "
            PRAGMA journal_mode = WAL;
            PRAGMA foreign_keys = ON;
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous  = NORMAL;
        ",
    )
    .into_core()?;

    Ok(db_path.to_string())
}

pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = r2d2::Pool::builder()
        .max_size(8)
        .min_idle(Some(1))
        .connection_timeout(Duration::from_secs(30))
        .connection_customizer(Box::new(ConnectionCustomizer))
        .build(manager)
        .map_err(|e| Error::Database(DatabaseError::PoolCreationFailed(e.to_string())))?;
    Ok(Arc::new(pool))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get().into_core()
}

pub fn run_migrations(pool: &DbPool) -> Result<()> {
    info!("Running database migrations");
    let mut connection = get_connection(pool)?;

    let applied = connection.run_pending_migrations(MIGRATIONS).map_err(|e| {
        error!("Database migration failed: {}", e);
        Error::from(StorageError::MigrationFailed(e.to_string()))
    })?;

    if applied.is_empty() {
        info!("No pending migrations to apply.");
    } else {
        info!("Applied the following migrations:");
        for migration_version in &applied {
            info!("  - {}", migration_version);
        }
    }

    Ok(())
}

#[derive(Debug)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), r2d2::Error> {
        conn.batch_execute(
            "
                PRAGMA foreign_keys = ON;
                PRAGMA busy_timeout = 30000;
                PRAGMA synchronous = NORMAL;
            ",
        )
        .map_err(r2d2::Error::QueryError)
    }
}
