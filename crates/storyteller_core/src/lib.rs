//! Core data types for the Storyteller service.
//!
//! A [`Story`] pairs a user prompt with generated text and a creation
//! timestamp. Stories are created once and never mutated.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod prompt;
mod story;

pub use prompt::Prompt;
pub use story::{NewStory, Story};
