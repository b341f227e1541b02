//! Error types for the Storyteller service.
//!
//! This crate provides the error taxonomy shared by every Storyteller crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The story pipeline reports exactly three outcomes through [`ServiceError`]:
//! a rejected prompt, a failed generation, or a failed persist.
//!
//! # Examples
//!
//! ```
//! use storyteller_error::{StorytellerResult, ConfigError};
//!
//! fn load() -> StorytellerResult<String> {
//!     Err(ConfigError::new("HF_API_KEY not set"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod service;
mod storage;
mod upstream;
mod validation;

pub use config::ConfigError;
pub use error::{StorytellerError, StorytellerErrorKind, StorytellerResult};
pub use json::JsonError;
pub use service::{ServiceError, ServiceErrorKind, ServiceResult};
pub use storage::{StorageError, StorageErrorKind, StorageResult};
pub use upstream::{UpstreamError, UpstreamErrorKind, UpstreamResult};
pub use validation::ValidationError;
