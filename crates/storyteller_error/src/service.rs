//! Outcomes of the story pipeline.

use crate::{StorageError, UpstreamError, ValidationError};

/// Why a story request did not complete.
///
/// Each variant is a terminal state of a single request; nothing is
/// persisted for `Rejected` or `GenerationFailed`.
#[derive(Debug, Clone, derive_more::Display, derive_more::From, derive_more::Error)]
pub enum ServiceErrorKind {
    /// The prompt failed validation
    #[display("Prompt rejected: {}", _0)]
    #[from(ValidationError)]
    Rejected(ValidationError),
    /// The generation client failed
    #[display("Generation failed: {}", _0)]
    #[from(UpstreamError)]
    GenerationFailed(UpstreamError),
    /// The story store failed
    #[display("Persistence failed: {}", _0)]
    #[from(StorageError)]
    PersistenceFailed(StorageError),
}

/// Story service error with location tracking.
///
/// # Examples
///
/// ```
/// use storyteller_error::{ServiceError, ServiceErrorKind, ValidationError};
///
/// let err = ServiceError::from(ValidationError::new("Prompt is required"));
/// assert!(matches!(err.kind, ServiceErrorKind::Rejected(_)));
/// assert_eq!(err.details(), "Prompt is required");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Service Error: {} at line {} in {}", kind, line, file)]
pub struct ServiceError {
    /// The kind of error that occurred
    pub kind: ServiceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ServiceError {
    /// Create a new service error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServiceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Human-readable cause, without source locations.
    pub fn details(&self) -> String {
        match &self.kind {
            ServiceErrorKind::Rejected(e) => e.message.clone(),
            ServiceErrorKind::GenerationFailed(e) => e.kind.to_string(),
            ServiceErrorKind::PersistenceFailed(e) => e.kind.to_string(),
        }
    }
}

impl<T> From<T> for ServiceError
where
    T: Into<ServiceErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for story service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
