//! Connection settings for the HuggingFace Inference API.

use derive_builder::Builder;
use derive_getters::Getters;
use std::time::Duration;

/// Default inference endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Settings for [`HuggingFaceClient`](crate::HuggingFaceClient).
///
/// # Examples
///
/// ```
/// use storyteller_models::HuggingFaceConfigBuilder;
/// use std::time::Duration;
///
/// let config = HuggingFaceConfigBuilder::default()
///     .api_key("hf_secret")
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model(), "gpt2");
/// assert_eq!(*config.max_length(), 100);
/// assert!(!format!("{:?}", config).contains("hf_secret"));
/// ```
#[derive(Clone, PartialEq, Eq, Builder, Getters)]
#[builder(setter(into))]
pub struct HuggingFaceConfig {
    /// Bearer credential
    api_key: String,
    /// Model identifier, appended to the base URL
    #[builder(default = "String::from(\"gpt2\")")]
    model: String,
    /// Endpoint prefix
    #[builder(default = "String::from(DEFAULT_BASE_URL)")]
    base_url: String,
    /// `max_length` hint sent with every request
    #[builder(default = "100")]
    max_length: u32,
    /// Upper bound on a single upstream call
    #[builder(default = "Duration::from_secs(30)")]
    timeout: Duration,
}

impl HuggingFaceConfig {
    /// Full URL of the model endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.model)
    }
}

impl std::fmt::Debug for HuggingFaceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_length", &self.max_length)
            .field("timeout", &self.timeout)
            .finish()
    }
}
