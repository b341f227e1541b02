//! Command-line interface module.

mod commands;
mod migrate;
mod serve;
mod stories;

pub use commands::{Cli, Commands, OutputFormat, StoriesCommands};
pub use migrate::migrate;
pub use serve::serve;
pub use stories::list_stories;
