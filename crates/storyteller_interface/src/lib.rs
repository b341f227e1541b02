//! Trait definitions for the Storyteller service.
//!
//! The story pipeline depends on two boundaries: a [`StoryGenerator`] that
//! turns a prompt into text, and a [`StoryStore`] that persists the result.
//! Both are constructed once at process start and handed to the service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{StoryGenerator, StoryStore};
