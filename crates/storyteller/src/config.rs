//! Process configuration.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`config/defaults.toml`)
//! 2. `./storyteller.toml`, or the file named with `--config`
//! 3. `STORYTELLER_<SECTION>__<KEY>` environment variables
//! 4. `PORT`, `DATABASE_URL` and `HF_API_KEY`

use config::{Config, Environment, File, FileFormat, Map};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use storyteller_error::ConfigError;
use storyteller_models::{HuggingFaceConfig, HuggingFaceConfigBuilder};
use storyteller_server::ServerConfig;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../config/defaults.toml");

/// Conventional variables and the keys they set.
const CONVENTIONAL_VARS: [(&str, &str); 3] = [
    ("PORT", "server.port"),
    ("DATABASE_URL", "database.url"),
    ("HF_API_KEY", "upstream.api_key"),
];

/// HuggingFace endpoint settings.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamSettings {
    /// Endpoint prefix; the model name is appended
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Bearer credential
    pub api_key: Option<String>,
    /// `max_length` hint sent with every request
    pub max_length: u32,
    /// Upper bound on one upstream call, in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for UpstreamSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("max_length", &self.max_length)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Story store settings.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseSettings {
    /// PostgreSQL connection string
    pub url: Option<String>,
    /// Maximum pooled connections
    pub pool_size: u32,
    /// Upper bound on opening the initial connections, in seconds
    pub connect_timeout_secs: u64,
    /// Apply pending migrations before serving
    pub run_migrations: bool,
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("pool_size", &self.pool_size)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of text
    pub json: bool,
}

/// Everything the binary reads at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// HTTP listener
    pub server: ServerConfig,
    /// Generation endpoint
    pub upstream: UpstreamSettings,
    /// Story store
    pub database: DatabaseSettings,
    /// Logging
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Load from the bundled defaults, an optional file and the process
    /// environment (after reading `.env`).
    ///
    /// Without `path`, `./storyteller.toml` is used if it exists. A `path`
    /// that does not exist is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let vars: Map<String, String> = std::env::vars().collect();
        Self::load_from(path, vars)
    }

    /// Like [`AppConfig::load`], reading variables from `vars` instead of
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    #[instrument(skip(vars), fields(path = ?path))]
    pub fn load_from(path: Option<&Path>, vars: Map<String, String>) -> Result<Self, ConfigError> {
        debug!("Loading configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        builder = match path {
            Some(path) => builder.add_source(File::from(path).format(FileFormat::Toml)),
            None => builder.add_source(File::with_name("storyteller").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("STORYTELLER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars.clone())),
        );

        for (var, key) in CONVENTIONAL_VARS {
            builder = builder
                .set_override_option(key, vars.get(var).cloned())
                .map_err(|e| ConfigError::new(format!("Invalid {}: {}", var, e)))?;
        }

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))
    }

    /// Client settings for the generation endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured.
    pub fn huggingface(&self) -> Result<HuggingFaceConfig, ConfigError> {
        let api_key = self
            .upstream
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::new("HF_API_KEY not set"))?;

        HuggingFaceConfigBuilder::default()
            .api_key(api_key)
            .model(self.upstream.model.clone())
            .base_url(self.upstream.base_url.clone())
            .max_length(self.upstream.max_length)
            .timeout(Duration::from_secs(self.upstream.timeout_secs))
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid upstream configuration: {}", e)))
    }

    /// The story store connection string.
    ///
    /// # Errors
    ///
    /// Returns an error if no database URL is configured.
    pub fn database_url(&self) -> Result<&str, ConfigError> {
        self.database
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::new("DATABASE_URL not set"))
    }
}
