//! Listener setup and the serve loop.

use crate::{AppState, ServerConfig, create_router};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Bind the configured address.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub async fn bind(config: &ServerConfig) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind(config.socket_addr()).await?;
    info!(addr = %listener.local_addr()?, "Listening");
    Ok(listener)
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish after `shutdown` fires.
///
/// # Errors
///
/// Returns an error if the listener fails.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    config: &ServerConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let router = create_router(state, config);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Server stopped");
    Ok(())
}
