//! Database connection utilities.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use storyteller_error::{StorageError, StorageErrorKind, StorageResult};
use std::time::Duration;
use tracing::instrument;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Pooled PostgreSQL connections.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Create a connection pool for the PostgreSQL database, giving up on
/// the initial connections after `connection_timeout`.
///
/// Blocks the calling thread while connecting.
///
/// # Errors
///
/// Returns an error if the pool cannot open its initial connections in time.
#[instrument(name = "database.create_pool", skip(database_url))]
pub fn create_pool(
    database_url: &str,
    max_size: u32,
    connection_timeout: Duration,
) -> StorageResult<PgPool> {
    tracing::debug!("Creating PostgreSQL connection pool");
    let manager = ConnectionManager::<PgConnection>::new(database_url);

    Pool::builder()
        .max_size(max_size)
        .connection_timeout(connection_timeout)
        .build(manager)
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create connection pool");
            StorageError::new(StorageErrorKind::Connection(e.to_string()))
        })
}

/// Run pending migrations.
///
/// # Errors
///
/// Returns an error if a connection cannot be checked out or a migration fails.
#[instrument(name = "database.run_migrations", skip_all)]
pub fn run_pending_migrations(pool: &PgPool) -> StorageResult<usize> {
    let mut conn = pool.get()?;

    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
        tracing::error!(error = %e, "Migration failed");
        StorageError::new(StorageErrorKind::Migration(e.to_string()))
    })?;

    for version in &applied {
        tracing::info!(version = %version, "Applied migration");
    }

    Ok(applied.len())
}
