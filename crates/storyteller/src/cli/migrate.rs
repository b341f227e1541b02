//! The `migrate` command.

use storyteller::{AppConfig, open_pool};
use storyteller_error::StorytellerResult;

/// Apply pending migrations and report how many ran.
pub async fn migrate(config: &AppConfig) -> StorytellerResult<()> {
    let (_pool, applied) = open_pool(config, 1, true).await?;
    println!("Applied {} migration(s)", applied);
    Ok(())
}
