//! In-memory implementation of StoryStore.
//!
//! Stories live in a vector behind an RwLock and are lost when the last
//! clone of the store is dropped. Useful for tests and for running the
//! server without PostgreSQL.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use storyteller_core::{NewStory, Story};
use storyteller_error::{StorageError, StorageErrorKind, StorageResult};
use storyteller_interface::StoryStore;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory story store.
///
/// Clones share the same stories.
///
/// # Example
/// ```no_run
/// use storyteller_service::InMemoryStoryStore;
///
/// #[tokio::main]
/// async fn main() {
///     let store = InMemoryStoryStore::new();
///     assert!(store.is_empty().await);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoryStore {
    /// Stories in insertion order
    stories: Arc<RwLock<Vec<Story>>>,
    /// Every call to `insert`, successful or not
    insert_attempts: Arc<AtomicUsize>,
    /// When set, every operation fails with a connection error
    unavailable: Arc<AtomicBool>,
}

impl InMemoryStoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored stories.
    pub async fn len(&self) -> usize {
        self.stories.read().await.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.stories.read().await.is_empty()
    }

    /// Number of times `insert` has been called.
    pub fn insert_attempts(&self) -> usize {
        self.insert_attempts.load(Ordering::SeqCst)
    }

    /// Simulate an unreachable backing store.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> StorageResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::new(StorageErrorKind::Connection(
                "in-memory store marked unavailable".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl StoryStore for InMemoryStoryStore {
    async fn insert(&self, story: NewStory) -> StorageResult<Story> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let story = story.into_story(Uuid::new_v4());
        self.stories.write().await.push(story.clone());
        Ok(story)
    }

    async fn list_all(&self) -> StorageResult<Vec<Story>> {
        self.check_available()?;

        // Reverse insertion order first; the stable sort keeps later
        // inserts ahead of earlier ones with the same timestamp.
        let mut stories: Vec<Story> = self.stories.read().await.iter().rev().cloned().collect();
        stories.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(stories)
    }
}
