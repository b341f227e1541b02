//! Stored story command handlers.

use super::OutputFormat;
use storyteller::{AppConfig, open_pool};
use storyteller_core::Story;
use storyteller_database::PostgresStoryStore;
use storyteller_error::{JsonError, StorytellerResult};
use storyteller_interface::StoryStore;

/// Print every stored story, newest first.
pub async fn list_stories(config: &AppConfig, format: OutputFormat) -> StorytellerResult<()> {
    let (pool, _) = open_pool(config, 1, false).await?;
    let stories = PostgresStoryStore::new(pool).list_all().await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stories)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("{:-<80}", "");
            for story in &stories {
                print_story(story);
                println!("{:-<80}", "");
            }
            println!("Total: {} stories", stories.len());
        }
    }

    Ok(())
}

fn print_story(story: &Story) {
    println!("{}  {}", story.created_at().to_rfc3339(), story.id());
    println!("Prompt: {}", story.prompt());
    println!();
    println!("{}", story.content());
}
