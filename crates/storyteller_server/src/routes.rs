//! Routes and handlers.

use crate::{ApiError, ServerConfig};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use storyteller_core::Story;
use storyteller_service::StoryService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, instrument, warn};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    service: StoryService,
}

impl AppState {
    /// Wrap a story service for the handlers.
    pub fn new(service: StoryService) -> Self {
        Self { service }
    }
}

/// Body of `POST /api/stories/generate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateStoryRequest {
    /// Text to continue
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Successful reply from `POST /api/stories/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateStoryResponse {
    /// The stored story
    pub story: Story,
}

/// Build the API router.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/api/stories", get(list_stories))
        .route("/api/stories/generate", post(generate_story))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.cors_allow_any_origin {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

#[instrument(skip_all)]
async fn generate_story(
    State(state): State<AppState>,
    body: Result<Json<GenerateStoryRequest>, JsonRejection>,
) -> Result<Json<GenerateStoryResponse>, ApiError> {
    let prompt = match body {
        Ok(Json(GenerateStoryRequest {
            prompt: Some(prompt),
        })) => prompt,
        Ok(_) => {
            warn!("Request without prompt");
            return Err(ApiError::prompt_required());
        }
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Unreadable request body");
            return Err(ApiError::prompt_required());
        }
    };

    let story = state
        .service
        .create_story(prompt)
        .await
        .map_err(|e| ApiError::from_create(&e))?;

    debug!(id = %story.id(), "Returning story");
    Ok(Json(GenerateStoryResponse { story }))
}

#[instrument(skip_all)]
async fn list_stories(State(state): State<AppState>) -> Result<Json<Vec<Story>>, ApiError> {
    let stories = state
        .service
        .list_stories()
        .await
        .map_err(|e| ApiError::from_list(&e))?;

    Ok(Json(stories))
}
