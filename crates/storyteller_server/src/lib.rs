//! HTTP API for Storyteller.
//!
//! Exposes the story service over two JSON endpoints plus a health check:
//!
//! - `POST /api/stories/generate` with `{"prompt": "..."}`
//! - `GET /api/stories`
//! - `GET /health`
//!
//! # Example
//!
//! ```no_run
//! use storyteller_server::{AppState, ServerConfig, create_router};
//! use storyteller_service::{InMemoryStoryStore, StoryService};
//! # use storyteller_interface::StoryGenerator;
//! # async fn run(generator: impl StoryGenerator + 'static) -> std::io::Result<()> {
//! let config = ServerConfig::default();
//! let state = AppState::new(StoryService::new(generator, InMemoryStoryStore::new()));
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, create_router(state, &config)).await
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod routes;
mod server;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{AppState, GenerateStoryRequest, GenerateStoryResponse, create_router};
pub use server::{bind, serve};
