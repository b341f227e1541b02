//! PostgreSQL story store for Storyteller.
//!
//! This crate provides the database schema, row models, connection pooling,
//! embedded migrations, and the [`PostgresStoryStore`] implementation of
//! `StoryStore`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use storyteller_database::{create_pool, run_pending_migrations, PostgresStoryStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("postgres://localhost/storyteller", 10, Duration::from_secs(30))?;
//! run_pending_migrations(&pool)?;
//! let store = PostgresStoryStore::new(pool);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod models;
mod repository;

/// Diesel table definitions.
pub mod schema;

pub use connection::{PgPool, create_pool, run_pending_migrations};
pub use models::{NewStoryRow, StoryRow};
pub use repository::PostgresStoryStore;
