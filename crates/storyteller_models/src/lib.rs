//! Text-generation provider clients for Storyteller.
//!
//! Currently a single provider: the HuggingFace Inference API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod huggingface;

pub use huggingface::{
    GenerationOutcome, HuggingFaceClient, HuggingFaceConfig, HuggingFaceConfigBuilder,
    HuggingFaceRequest, HuggingFaceRequestBuilder, interpret_response,
};
