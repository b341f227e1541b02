//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Storyteller - generate short stories from prompts and keep them
#[derive(Parser, Debug)]
#[command(name = "storyteller")]
#[command(about = "Generate short stories from prompts and keep them", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./storyteller.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Keep stories in memory instead of PostgreSQL
        #[arg(long)]
        in_memory: bool,
    },

    /// Apply pending database migrations
    Migrate,

    /// Stored story commands
    #[command(subcommand)]
    Stories(StoriesCommands),
}

/// Stored story subcommands
#[derive(Subcommand, Debug)]
pub enum StoriesCommands {
    /// List stories, newest first
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
