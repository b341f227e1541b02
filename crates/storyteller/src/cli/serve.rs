//! The `serve` command.

use storyteller::{AppConfig, open_pool};
use storyteller_database::PostgresStoryStore;
use storyteller_error::StorytellerResult;
use storyteller_models::HuggingFaceClient;
use storyteller_server::AppState;
use storyteller_service::{InMemoryStoryStore, StoryService};
use tracing::{error, info, warn};

/// Serve the HTTP API until Ctrl+C.
pub async fn serve(config: &AppConfig, in_memory: bool) -> StorytellerResult<()> {
    let client = HuggingFaceClient::new(config.huggingface()?)?;
    info!(model = %config.upstream.model, "Using HuggingFace model");

    let service = if in_memory {
        warn!("Stories are kept in memory and lost on exit");
        StoryService::new(client, InMemoryStoryStore::new())
    } else {
        let (pool, _) = open_pool(
            config,
            config.database.pool_size,
            config.database.run_migrations,
        )
        .await?;
        StoryService::new(client, PostgresStoryStore::new(pool))
    };

    let listener = storyteller_server::bind(&config.server).await?;
    storyteller_server::serve(
        listener,
        AppState::new(service),
        &config.server,
        shutdown_signal(),
    )
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => error!(error = %e, "Failed to listen for Ctrl+C"),
    }
}
