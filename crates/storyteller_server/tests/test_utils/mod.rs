//! Test utilities for Storyteller HTTP API tests.
//!
//! Serves the real router on an ephemeral port, with test doubles behind it.

use async_trait::async_trait;
use axum::{Router, http::StatusCode, routing::post};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use storyteller_core::Prompt;
use storyteller_error::{UpstreamError, UpstreamErrorKind, UpstreamResult};
use storyteller_interface::StoryGenerator;
use storyteller_models::{HuggingFaceClient, HuggingFaceConfigBuilder};
use storyteller_server::{AppState, ServerConfig, create_router};
use storyteller_service::{InMemoryStoryStore, StoryService};

/// Generator with a fixed outcome and a call counter.
#[derive(Clone)]
pub struct FixedGenerator {
    outcome: Result<String, UpstreamErrorKind>,
    calls: Arc<AtomicUsize>,
}

impl FixedGenerator {
    /// Always succeed with `text`.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Always fail with `kind`.
    pub fn failing(kind: UpstreamErrorKind) -> Self {
        Self {
            outcome: Err(kind),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoryGenerator for FixedGenerator {
    async fn generate(&self, _prompt: &Prompt) -> UpstreamResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map_err(UpstreamError::new)
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }

    fn model_name(&self) -> &str {
        "fixed-model"
    }
}

/// A running API server.
pub struct TestApi {
    base_url: String,
    client: reqwest::Client,
}

impl TestApi {
    /// Serve the router over `generator` and `store`.
    pub async fn start(generator: impl StoryGenerator + 'static, store: InMemoryStoryStore) -> Self {
        let state = AppState::new(StoryService::new(generator, store));
        let router = create_router(state, &ServerConfig::new("127.0.0.1", 0));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test api");
        let addr = listener.local_addr().expect("test api address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test api");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    /// Absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Shared HTTP client.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// POST `body` as JSON to the generate endpoint.
    pub async fn generate(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url("/api/stories/generate"))
            .json(&body)
            .send()
            .await
            .expect("generate request")
    }

    /// GET the story list.
    pub async fn list(&self) -> reqwest::Response {
        self.client
            .get(self.url("/api/stories"))
            .send()
            .await
            .expect("list request")
    }
}

/// Start a stand-in HuggingFace endpoint replying `status` with `body`,
/// returning a client pointed at it and its request counter.
pub async fn upstream_client(status: u16, body: &'static str) -> (HuggingFaceClient, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let status = StatusCode::from_u16(status).expect("valid status");
    let app = Router::new().route(
        "/models/:model",
        post(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (status, body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let addr = listener.local_addr().expect("mock upstream address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock upstream");
    });

    let config = HuggingFaceConfigBuilder::default()
        .api_key("hf_test_key")
        .base_url(format!("http://{addr}/models"))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build config");
    let client = HuggingFaceClient::new(config).expect("Failed to build client");
    (client, calls)
}
