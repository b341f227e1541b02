//! Boundary traits for generation and persistence.

use async_trait::async_trait;
use std::sync::Arc;
use storyteller_core::{NewStory, Prompt, Story};
use storyteller_error::{StorageResult, UpstreamResult};

/// Durable record of generated stories.
///
/// Implementations rely on the backing store for concurrency; callers may
/// insert and list from many tasks at once.
#[async_trait]
pub trait StoryStore: Send + Sync {
    /// Store a new story, assigning its identifier.
    async fn insert(&self, story: NewStory) -> StorageResult<Story>;

    /// All stories, newest `created_at` first; equal timestamps list the
    /// later insert first. An empty store yields an empty vector.
    async fn list_all(&self) -> StorageResult<Vec<Story>>;
}

/// Client of an external text-generation model.
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    /// Generate text continuing `prompt`. Exactly one upstream attempt.
    async fn generate(&self, prompt: &Prompt) -> UpstreamResult<String>;

    /// Provider name (e.g., "huggingface").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt2").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: StoryStore + ?Sized> StoryStore for Arc<T> {
    async fn insert(&self, story: NewStory) -> StorageResult<Story> {
        (**self).insert(story).await
    }

    async fn list_all(&self) -> StorageResult<Vec<Story>> {
        (**self).list_all().await
    }
}

#[async_trait]
impl<T: StoryGenerator + ?Sized> StoryGenerator for Arc<T> {
    async fn generate(&self, prompt: &Prompt) -> UpstreamResult<String> {
        (**self).generate(prompt).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
