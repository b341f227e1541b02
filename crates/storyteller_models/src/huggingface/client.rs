//! HuggingFace Inference API client using reqwest.

use crate::huggingface::{GenerationOutcome, HuggingFaceConfig, HuggingFaceRequest, interpret_response};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use storyteller_core::Prompt;
use storyteller_error::{UpstreamError, UpstreamErrorKind, UpstreamResult};
use storyteller_interface::StoryGenerator;
use tracing::{debug, error, info, instrument};

/// HuggingFace Inference API client.
///
/// Sends one request per call; there is no retry.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    config: HuggingFaceConfig,
}

impl HuggingFaceClient {
    /// Creates a new client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(model = %config.model()))]
    pub fn new(config: HuggingFaceConfig) -> UpstreamResult<Self> {
        let client = Client::builder()
            .timeout(*config.timeout())
            .build()
            .map_err(|e| {
                UpstreamError::new(UpstreamErrorKind::Configuration(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        debug!(endpoint = %config.endpoint(), "Created HuggingFace client");

        Ok(Self { client, config })
    }

    /// Creates a new client for `model`, reading the credential from `HF_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns error if `HF_API_KEY` is not set.
    #[instrument(skip_all, fields(model = %model.as_ref()))]
    pub fn from_env(model: impl AsRef<str>) -> UpstreamResult<Self> {
        let api_key = std::env::var("HF_API_KEY").map_err(|e| {
            UpstreamError::new(UpstreamErrorKind::Configuration(format!(
                "HF_API_KEY not set: {}",
                e
            )))
        })?;

        let config = crate::HuggingFaceConfigBuilder::default()
            .api_key(api_key)
            .model(model.as_ref())
            .build()
            .map_err(|e| {
                UpstreamError::new(UpstreamErrorKind::Configuration(e.to_string()))
            })?;

        Self::new(config)
    }

    /// Settings in use.
    pub fn config(&self) -> &HuggingFaceConfig {
        &self.config
    }

    fn build_request(&self, prompt: &Prompt) -> UpstreamResult<HuggingFaceRequest> {
        HuggingFaceRequest::builder()
            .inputs(prompt.as_str())
            .max_length(*self.config.max_length())
            .build()
            .map_err(|e| {
                UpstreamError::new(UpstreamErrorKind::Configuration(format!(
                    "Failed to build request: {}",
                    e
                )))
            })
    }
}

fn transport_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::new(UpstreamErrorKind::Timeout(e.to_string()))
    } else {
        UpstreamError::new(UpstreamErrorKind::Network(e.to_string()))
    }
}

#[async_trait]
impl StoryGenerator for HuggingFaceClient {
    #[instrument(skip(self, prompt), fields(model = %self.config.model(), prompt_len = prompt.as_str().len()))]
    async fn generate(&self, prompt: &Prompt) -> UpstreamResult<String> {
        let body = self.build_request(prompt)?;
        let url = self.config.endpoint();

        debug!(url = %url, max_length = *body.max_length(), "Sending request to HuggingFace");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                transport_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            let kind = match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    UpstreamErrorKind::Unauthorized {
                        status: status.as_u16(),
                        message: error_text,
                    }
                }
                _ => UpstreamErrorKind::Status {
                    status: status.as_u16(),
                    message: error_text,
                },
            };
            return Err(UpstreamError::new(kind));
        }

        let response_text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response");
            transport_error(e)
        })?;

        debug!(response_len = response_text.len(), "Received response");

        match interpret_response(&response_text) {
            GenerationOutcome::Generated(text) => {
                info!(generated_len = text.len(), "Generated text");
                Ok(text)
            }
            GenerationOutcome::Malformed(reason) => {
                error!(reason = %reason, response = %response_text, "Unusable response body");
                Err(UpstreamError::new(UpstreamErrorKind::MalformedResponse(reason)))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
