//! Storyteller CLI binary.
//!
//! - Serve the story HTTP API
//! - Apply database migrations
//! - List stored stories

use clap::Parser;
use storyteller::{AppConfig, ObservabilityConfig, init_observability};
use storyteller_error::StorytellerResult;

mod cli;

#[tokio::main]
async fn main() -> StorytellerResult<()> {
    use cli::{Cli, Commands, StoriesCommands, list_stories, migrate, serve};

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    init_observability(
        &ObservabilityConfig::default()
            .with_log_level(log_level)
            .with_json_logs(config.logging.json),
    )?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Serve { in_memory } => serve(&config, in_memory).await?,
        Commands::Migrate => migrate(&config).await?,
        Commands::Stories(StoriesCommands::List { format }) => {
            list_stories(&config, format).await?
        }
    }

    Ok(())
}
