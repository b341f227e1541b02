//! Validated user prompts.

use serde::Serialize;
use storyteller_error::ValidationError;

/// A prompt that is known to contain at least one non-whitespace character.
///
/// The original text is kept verbatim; validation never trims it.
///
/// # Examples
///
/// ```
/// use storyteller_core::Prompt;
///
/// let prompt = Prompt::parse("a brave knight").unwrap();
/// assert_eq!(prompt.as_str(), "a brave knight");
///
/// assert!(Prompt::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    /// Validate raw caller input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the input is empty or whitespace-only.
    #[track_caller]
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::new("Prompt is required"));
        }
        Ok(Self(raw))
    }

    /// Borrow the prompt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the prompt, returning the text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
