//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, ServiceError, StorageError, UpstreamError, ValidationError};

/// Every failure family a Storyteller process can surface.
///
/// # Examples
///
/// ```
/// use storyteller_error::{StorytellerError, ConfigError};
///
/// let err: StorytellerError = ConfigError::new("missing port").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorytellerErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Input validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Upstream generation error
    #[from(UpstreamError)]
    Upstream(UpstreamError),
    /// Story store error
    #[from(StorageError)]
    Storage(StorageError),
    /// Story pipeline error
    #[from(ServiceError)]
    Service(ServiceError),
    /// JSON rendering error
    #[from(JsonError)]
    Json(JsonError),
    /// I/O error while binding or serving
    #[from(std::io::Error)]
    Io(std::io::Error),
}

/// Storyteller error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyteller_error::{StorytellerResult, StorageError, StorageErrorKind};
///
/// fn might_fail() -> StorytellerResult<()> {
///     Err(StorageError::new(StorageErrorKind::Query("boom".to_string())))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyteller Error: {}", _0)]
pub struct StorytellerError(Box<StorytellerErrorKind>);

impl StorytellerError {
    /// Create a new error from a kind.
    pub fn new(kind: StorytellerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorytellerErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StorytellerErrorKind
impl<T> From<T> for StorytellerError
where
    T: Into<StorytellerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyteller operations.
pub type StorytellerResult<T> = std::result::Result<T, StorytellerError>;
