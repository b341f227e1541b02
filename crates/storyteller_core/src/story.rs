//! The story record.

use crate::Prompt;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted story.
///
/// Serialized as `{id, prompt, content, createdAt}` with `createdAt` in RFC 3339.
///
/// # Examples
///
/// ```
/// use storyteller_core::Story;
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let story = Story::new(Uuid::new_v4(), "a brave knight", "who saved the village", Utc::now());
/// let json = serde_json::to_value(&story).unwrap();
/// assert_eq!(json["prompt"], "a brave knight");
/// assert!(json.get("createdAt").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Identifier assigned by the store
    id: Uuid,
    /// Prompt supplied by the caller
    prompt: String,
    /// Text produced by the generation client
    content: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Story {
    /// Assemble a story from stored values.
    pub fn new(
        id: Uuid,
        prompt: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            content: content.into(),
            created_at,
        }
    }
}

/// A story that has been generated but not yet stored.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct NewStory {
    prompt: Prompt,
    content: String,
    created_at: DateTime<Utc>,
}

impl NewStory {
    /// Pair a prompt with its generated text.
    pub fn new(prompt: Prompt, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            prompt,
            content: content.into(),
            created_at,
        }
    }

    /// Attach the store-assigned identifier.
    pub fn into_story(self, id: Uuid) -> Story {
        Story {
            id,
            prompt: self.prompt.into_inner(),
            content: self.content,
            created_at: self.created_at,
        }
    }
}
