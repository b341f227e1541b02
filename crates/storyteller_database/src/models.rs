//! Row types for the `stories` table.

use crate::schema::stories;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use storyteller_core::{NewStory, Story};
use uuid::Uuid;

/// A stored story row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = stories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StoryRow {
    /// Store-assigned identifier
    pub id: Uuid,
    /// Insertion sequence, breaks `created_at` ties
    pub seq: i64,
    /// Caller prompt
    pub prompt: String,
    /// Generated text
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// New story row for insertion; `id` and `seq` come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = stories)]
pub struct NewStoryRow {
    /// Caller prompt
    pub prompt: String,
    /// Generated text
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<NewStory> for NewStoryRow {
    fn from(story: NewStory) -> Self {
        let created_at = *story.created_at();
        let content = story.content().clone();
        Self {
            prompt: story.prompt().as_str().to_string(),
            content,
            created_at,
        }
    }
}

impl From<StoryRow> for Story {
    fn from(row: StoryRow) -> Self {
        Story::new(row.id, row.prompt, row.content, row.created_at)
    }
}
