//! Errors raised while talking to the upstream text-generation service.

/// Upstream failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum UpstreamErrorKind {
    /// The request never produced an HTTP response
    #[display("Upstream request failed: {}", _0)]
    Network(String),

    /// No response arrived within the configured timeout
    #[display("Upstream request timed out: {}", _0)]
    Timeout(String),

    /// The upstream rejected the credential (401/403)
    #[display("Upstream rejected credentials ({}): {}", status, message)]
    Unauthorized {
        /// HTTP status code
        status: u16,
        /// Response body returned by the upstream
        message: String,
    },

    /// Any other non-success HTTP status
    #[display("Upstream returned status {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body returned by the upstream
        message: String,
    },

    /// The response body did not carry usable generated text
    #[display("Malformed upstream response: {}", _0)]
    MalformedResponse(String),

    /// The client could not be constructed
    #[display("Invalid upstream configuration: {}", _0)]
    Configuration(String),
}

/// Upstream error with location tracking.
///
/// # Examples
///
/// ```
/// use storyteller_error::{UpstreamError, UpstreamErrorKind};
///
/// let err = UpstreamError::new(UpstreamErrorKind::Status {
///     status: 503,
///     message: "Model is loading".to_string(),
/// });
/// assert!(format!("{}", err).contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upstream Error: {} at line {} in {}", kind, line, file)]
pub struct UpstreamError {
    /// The kind of error that occurred
    pub kind: UpstreamErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UpstreamError {
    /// Create a new upstream error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UpstreamErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for upstream calls.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
