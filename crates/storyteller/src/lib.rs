//! Storyteller: turn a prompt into a stored story.
//!
//! This crate wires the Storyteller components into a binary. The library
//! half exposes configuration loading, story store setup and logging
//! setup so they can be tested on their own.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod database;
mod observability;

pub use config::{AppConfig, DatabaseSettings, LoggingSettings, UpstreamSettings};
pub use database::open_pool;
pub use observability::{ObservabilityConfig, init_observability};
