//! HuggingFace Inference API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::Serialize;
use serde_json::Value;

/// Text-generation request body: `{"inputs": ..., "max_length": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct HuggingFaceRequest {
    /// Prompt text
    inputs: String,
    /// Maximum length hint, in tokens
    max_length: u32,
}

impl HuggingFaceRequest {
    /// Creates a new builder for `HuggingFaceRequest`.
    pub fn builder() -> HuggingFaceRequestBuilder {
        HuggingFaceRequestBuilder::default()
    }
}

/// Result of checking an upstream response body against the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The body carried non-empty generated text
    Generated(String),
    /// The body did not match `[{"generated_text": "..."}, ...]`
    Malformed(String),
}

/// Interpret a raw response body.
///
/// Only a JSON array whose first element is an object with a non-empty
/// string `generated_text` is accepted.
///
/// # Examples
///
/// ```
/// use storyteller_models::{interpret_response, GenerationOutcome};
///
/// let outcome = interpret_response(r#"[{"generated_text": "Once upon a time"}]"#);
/// assert_eq!(outcome, GenerationOutcome::Generated("Once upon a time".to_string()));
///
/// let outcome = interpret_response(r#"{"error": "Model gpt2 is currently loading"}"#);
/// assert!(matches!(outcome, GenerationOutcome::Malformed(_)));
/// ```
pub fn interpret_response(body: &str) -> GenerationOutcome {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => return GenerationOutcome::Malformed(format!("Failed to parse JSON: {}", e)),
    };

    let Some(array) = value.as_array() else {
        return GenerationOutcome::Malformed("Expected a JSON array".to_string());
    };

    let Some(first) = array.first() else {
        return GenerationOutcome::Malformed("Response array is empty".to_string());
    };

    match first.get("generated_text") {
        Some(Value::String(text)) if !text.is_empty() => {
            GenerationOutcome::Generated(text.clone())
        }
        Some(Value::String(_)) => {
            GenerationOutcome::Malformed("generated_text is empty".to_string())
        }
        Some(_) => GenerationOutcome::Malformed("generated_text is not a string".to_string()),
        None => GenerationOutcome::Malformed("Missing generated_text in response".to_string()),
    }
}
