//! Story store error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// The store could not be reached
    #[display("Storage connection error: {}", _0)]
    Connection(String),
    /// A read or write failed
    #[display("Storage query error: {}", _0)]
    Query(String),
    /// Schema migration failed
    #[display("Migration error: {}", _0)]
    Migration(String),
    /// A stored value could not be converted
    #[display("Serialization error: {}", _0)]
    Serialization(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use storyteller_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Connection("refused".to_string()));
/// assert!(format!("{}", err).contains("connection"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for story store operations.
pub type StorageResult<T> = Result<T, StorageError>;

// Diesel error conversions (only available with database feature)
#[cfg(feature = "database")]
impl From<diesel::result::Error> for StorageError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ClosedConnection,
                _,
            ) => StorageError::new(StorageErrorKind::Connection(err.to_string())),
            diesel::result::Error::DeserializationError(_)
            | diesel::result::Error::SerializationError(_) => {
                StorageError::new(StorageErrorKind::Serialization(err.to_string()))
            }
            _ => StorageError::new(StorageErrorKind::Query(err.to_string())),
        }
    }
}

#[cfg(feature = "database")]
impl From<diesel::ConnectionError> for StorageError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        StorageError::new(StorageErrorKind::Connection(err.to_string()))
    }
}

#[cfg(feature = "database")]
impl From<diesel::r2d2::PoolError> for StorageError {
    #[track_caller]
    fn from(err: diesel::r2d2::PoolError) -> Self {
        StorageError::new(StorageErrorKind::Connection(err.to_string()))
    }
}
