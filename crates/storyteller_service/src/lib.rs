//! Story generation pipeline for Storyteller.
//!
//! [`StoryService`] validates a prompt, asks a `StoryGenerator` for text,
//! and persists the result through a `StoryStore`. Each request either
//! returns a complete stored story or one of three errors; nothing is
//! persisted unless generation succeeded.
//!
//! [`InMemoryStoryStore`] implements `StoryStore` without a database.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod in_memory_store;
mod service;

pub use in_memory_store::InMemoryStoryStore;
pub use service::StoryService;
