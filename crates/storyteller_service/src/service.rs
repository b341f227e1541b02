//! The story pipeline: validate, generate, persist.

use chrono::Utc;
use std::sync::Arc;
use storyteller_core::{NewStory, Prompt, Story};
use storyteller_error::{ServiceError, ServiceResult, UpstreamError, UpstreamErrorKind};
use storyteller_interface::{StoryGenerator, StoryStore};
use tracing::{debug, error, info, instrument, warn};

/// Orchestrates story creation and listing.
///
/// Cheap to clone; the generator and store are shared.
///
/// # Example
/// ```no_run
/// use storyteller_service::{InMemoryStoryStore, StoryService};
/// # use storyteller_interface::StoryGenerator;
/// # async fn example(generator: impl StoryGenerator + 'static) -> Result<(), Box<dyn std::error::Error>> {
/// let service = StoryService::new(generator, InMemoryStoryStore::new());
/// let story = service.create_story("a brave knight").await?;
/// assert_eq!(story.prompt(), "a brave knight");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StoryService {
    generator: Arc<dyn StoryGenerator>,
    store: Arc<dyn StoryStore>,
}

impl StoryService {
    /// Create a service over a generator and a store.
    pub fn new(
        generator: impl StoryGenerator + 'static,
        store: impl StoryStore + 'static,
    ) -> Self {
        Self {
            generator: Arc::new(generator),
            store: Arc::new(store),
        }
    }

    /// Generate and persist a story for `prompt`.
    ///
    /// # Errors
    ///
    /// - `Rejected` if the prompt is empty or whitespace-only; nothing else is attempted
    /// - `GenerationFailed` if the generator fails or returns empty text; nothing is persisted
    /// - `PersistenceFailed` if the store rejects the generated story
    #[instrument(skip_all, fields(provider = self.generator.provider_name(), model = %self.generator.model_name()))]
    pub async fn create_story(&self, prompt: impl Into<String>) -> ServiceResult<Story> {
        let prompt = Prompt::parse(prompt).map_err(|e| {
            warn!(reason = %e.message, "Rejected prompt");
            ServiceError::from(e)
        })?;

        debug!(prompt = %prompt, "Requesting generation");
        let content = self.generator.generate(&prompt).await.map_err(|e| {
            error!(error = %e.kind, "Generation failed; nothing persisted");
            ServiceError::from(e)
        })?;

        if content.is_empty() {
            error!("Generator returned empty text; nothing persisted");
            return Err(ServiceError::from(UpstreamError::new(
                UpstreamErrorKind::MalformedResponse("generated text is empty".to_string()),
            )));
        }

        let new_story = NewStory::new(prompt, content, Utc::now());
        let story = self.store.insert(new_story).await.map_err(|e| {
            error!(error = %e.kind, "Generated story could not be persisted");
            ServiceError::from(e)
        })?;

        info!(id = %story.id(), "Created story");
        Ok(story)
    }

    /// All stored stories, newest first.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceFailed` if the store cannot be read.
    #[instrument(skip_all)]
    pub async fn list_stories(&self) -> ServiceResult<Vec<Story>> {
        let stories = self.store.list_all().await.map_err(|e| {
            error!(error = %e.kind, "Failed to fetch stories");
            ServiceError::from(e)
        })?;

        debug!(count = stories.len(), "Fetched stories");
        Ok(stories)
    }
}

impl std::fmt::Debug for StoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryService")
            .field("provider", &self.generator.provider_name())
            .field("model", &self.generator.model_name())
            .finish_non_exhaustive()
    }
}
