//! Mock story generator for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use storyteller_core::Prompt;
use storyteller_error::{UpstreamError, UpstreamErrorKind, UpstreamResult};
use storyteller_interface::StoryGenerator;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the given text
    Success(String),
    /// Return the prompt followed by the given suffix
    Continue(String),
    /// Always return the specified error
    Error(UpstreamErrorKind),
}

/// Mock generator that records every prompt it receives.
#[derive(Clone)]
pub struct MockGenerator {
    behavior: MockBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    /// Create a mock that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock that continues each prompt with `suffix`.
    pub fn new_continue(suffix: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Continue(suffix.into()))
    }

    /// Create a mock that always fails with the given error.
    pub fn new_error(error: UpstreamErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoryGenerator for MockGenerator {
    async fn generate(&self, prompt: &Prompt) -> UpstreamResult<String> {
        self.prompts.lock().unwrap().push(prompt.as_str().to_string());

        match &self.behavior {
            MockBehavior::Success(text) => Ok(text.clone()),
            MockBehavior::Continue(suffix) => Ok(format!("{prompt}{suffix}")),
            MockBehavior::Error(kind) => Err(UpstreamError::new(kind.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
