//! Listener settings for the HTTP API.

use serde::Deserialize;

/// Where and how the HTTP API listens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0")
    pub bind: String,
    /// TCP port
    pub port: u16,
    /// Answer CORS preflight for any origin
    pub cors_allow_any_origin: bool,
}

impl ServerConfig {
    /// Create a configuration for `bind:port` with CORS open.
    pub fn new(bind: impl Into<String>, port: u16) -> Self {
        Self {
            bind: bind.into(),
            port,
            cors_allow_any_origin: true,
        }
    }

    /// `bind:port`, suitable for `TcpListener::bind`.
    pub fn socket_addr(&self) -> String {
        if self.bind.contains(':') {
            format!("[{}]:{}", self.bind, self.port)
        } else {
            format!("{}:{}", self.bind, self.port)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("0.0.0.0", 4000)
    }
}
