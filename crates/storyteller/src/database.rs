//! Story store setup for the CLI commands.

use crate::AppConfig;
use std::time::Duration;
use storyteller_database::{PgPool, create_pool, run_pending_migrations};
use storyteller_error::StorytellerResult;
use tracing::{info, instrument};

/// Open a pool of at most `max_size` connections, applying pending
/// migrations first when `migrate` is set.
///
/// Connecting and migrating run on the blocking thread pool. Returns the
/// pool and the number of migrations applied.
///
/// # Errors
///
/// Returns an error if no database URL is configured, the pool cannot
/// connect within `database.connect_timeout_secs`, or a migration fails.
#[instrument(skip(config))]
pub async fn open_pool(
    config: &AppConfig,
    max_size: u32,
    migrate: bool,
) -> StorytellerResult<(PgPool, usize)> {
    let url = config.database_url()?.to_string();
    let timeout = Duration::from_secs(config.database.connect_timeout_secs);

    let (pool, applied) = tokio::task::spawn_blocking(move || {
        let pool = create_pool(&url, max_size, timeout)?;
        let applied = if migrate {
            run_pending_migrations(&pool)?
        } else {
            0
        };
        Ok::<_, storyteller_error::StorageError>((pool, applied))
    })
    .await
    .map_err(|e| std::io::Error::other(e.to_string()))??;

    if migrate {
        info!(applied, "Migrations up to date");
    }
    Ok((pool, applied))
}
