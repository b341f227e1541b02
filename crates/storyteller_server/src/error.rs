//! Translation of service outcomes to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storyteller_error::{ServiceError, ServiceErrorKind};

/// A failed API call, rendered as a fixed status and JSON error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400 `{"error": message}`
    BadRequest(String),
    /// 500 `{"error": "Failed to generate story", "details": ...}`
    GenerationFailed(String),
    /// 500 `{"error": "Failed to fetch stories"}`
    FetchFailed,
}

impl ApiError {
    /// The response to a rejected or unparsable prompt.
    pub fn prompt_required() -> Self {
        Self::BadRequest("Prompt is required".to_string())
    }

    /// Map a failure from `create_story`.
    pub fn from_create(err: &ServiceError) -> Self {
        match &err.kind {
            ServiceErrorKind::Rejected(e) => Self::BadRequest(e.message.clone()),
            ServiceErrorKind::GenerationFailed(_) | ServiceErrorKind::PersistenceFailed(_) => {
                Self::GenerationFailed(err.details())
            }
        }
    }

    /// Map a failure from `list_stories`.
    pub fn from_list(_err: &ServiceError) -> Self {
        Self::FetchFailed
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::GenerationFailed(_) | Self::FetchFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::BadRequest(message) => json!({ "error": message }),
            Self::GenerationFailed(details) => json!({
                "error": "Failed to generate story",
                "details": details,
            }),
            Self::FetchFailed => json!({ "error": "Failed to fetch stories" }),
        };
        (status, Json(body)).into_response()
    }
}
