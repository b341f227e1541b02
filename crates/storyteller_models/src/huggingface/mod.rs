//! HuggingFace Inference API integration.

mod client;
mod config;
mod dto;

pub use client::HuggingFaceClient;
pub use config::{HuggingFaceConfig, HuggingFaceConfigBuilder};
pub use dto::{
    GenerationOutcome, HuggingFaceRequest, HuggingFaceRequestBuilder, interpret_response,
};
