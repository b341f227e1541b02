//! Test utilities for Storyteller model client tests.
//!
//! Provides a local HTTP server standing in for the HuggingFace endpoint.

use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storyteller_models::{HuggingFaceClient, HuggingFaceConfigBuilder};

/// A request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub model: String,
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    delay: Duration,
    calls: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<RecordedRequest>>>,
}

/// Mock HuggingFace endpoint with a fixed reply.
pub struct MockUpstream {
    addr: SocketAddr,
    calls: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<RecordedRequest>>>,
}

impl MockUpstream {
    /// Serve `body` with `status` for every request.
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    /// Like [`MockUpstream::start`], sleeping before each reply.
    pub async fn start_with_delay(status: u16, body: impl Into<String>, delay: Duration) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(Mutex::new(None));
        let state = MockState {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.into(),
            delay,
            calls: Arc::clone(&calls),
            last: Arc::clone(&last),
        };

        let app = Router::new()
            .route("/models/:model", post(handle))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock upstream");
        let addr = listener.local_addr().expect("mock upstream address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock upstream");
        });

        Self { addr, calls, last }
    }

    /// Base URL to configure the client with.
    pub fn base_url(&self) -> String {
        format!("http://{}/models", self.addr)
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Most recent request received.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.last.lock().expect("mock lock").clone()
    }

    /// Client pointed at this mock.
    pub fn client(&self, timeout: Duration) -> HuggingFaceClient {
        client_for(&self.base_url(), timeout)
    }
}

/// Client for an arbitrary base URL.
pub fn client_for(base_url: &str, timeout: Duration) -> HuggingFaceClient {
    let config = HuggingFaceConfigBuilder::default()
        .api_key("hf_test_key")
        .model("gpt2")
        .base_url(base_url)
        .timeout(timeout)
        .build()
        .expect("Failed to build config");
    HuggingFaceClient::new(config).expect("Failed to build client")
}

async fn handle(
    State(state): State<MockState>,
    Path(model): Path<String>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    state.calls.fetch_add(1, Ordering::SeqCst);
    let recorded = RecordedRequest {
        model,
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
    };
    *state.last.lock().expect("mock lock") = Some(recorded);

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, state.body.clone())
}
