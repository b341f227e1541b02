//! Test utilities for Storyteller service tests.
//!
//! This module provides a mock story generator.

pub mod mock_generator;

#[allow(unused_imports)]
pub use mock_generator::{MockBehavior, MockGenerator};
