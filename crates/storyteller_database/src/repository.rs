//! PostgreSQL implementation of StoryStore.

use crate::schema::stories;
use crate::{NewStoryRow, PgPool, StoryRow};
use async_trait::async_trait;
use diesel::prelude::*;
use storyteller_core::{NewStory, Story};
use storyteller_error::{StorageError, StorageErrorKind, StorageResult};
use storyteller_interface::StoryStore;
use tracing::{debug, error, instrument};

/// Database-backed story store.
///
/// Each call checks out its own pooled connection on the blocking thread
/// pool, so concurrent requests never share a connection.
#[derive(Clone)]
pub struct PostgresStoryStore {
    pool: PgPool,
}

impl PostgresStoryStore {
    /// Create a new story store with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run `f` with a pooled connection on the blocking thread pool.
    async fn with_conn<T, F>(&self, f: F) -> StorageResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> StorageResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await
        .map_err(|e| StorageError::new(StorageErrorKind::Query(e.to_string())))?
    }
}

impl std::fmt::Debug for PostgresStoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresStoryStore")
            .field("max_size", &self.pool.max_size())
            .finish()
    }
}

#[async_trait]
impl StoryStore for PostgresStoryStore {
    #[instrument(skip_all, fields(created_at = %story.created_at()))]
    async fn insert(&self, story: NewStory) -> StorageResult<Story> {
        let new_row = NewStoryRow::from(story);

        let row = self
            .with_conn(move |conn| {
                diesel::insert_into(stories::table)
                    .values(&new_row)
                    .returning(StoryRow::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)
            })
            .await
            .inspect_err(|e| error!(error = %e, "Failed to insert story"))?;

        debug!(id = %row.id, seq = row.seq, "Inserted story");
        Ok(row.into())
    }

    #[instrument(skip_all)]
    async fn list_all(&self) -> StorageResult<Vec<Story>> {
        let rows = self
            .with_conn(|conn| {
                stories::table
                    .order((stories::created_at.desc(), stories::seq.desc()))
                    .select(StoryRow::as_select())
                    .load(conn)
                    .map_err(StorageError::from)
            })
            .await
            .inspect_err(|e| error!(error = %e, "Failed to list stories"))?;

        debug!(count = rows.len(), "Listed stories");
        Ok(rows.into_iter().map(Story::from).collect())
    }
}
