//! Language-model collaborators for the Vignette video pipeline.
//!
//! Provides the OpenAI-backed [`Summarizer`](vignette_interface::Summarizer)
//! and [`KeywordExtractor`](vignette_interface::KeywordExtractor)
//! implementations. The pipeline itself only depends on the traits, so these
//! clients are swappable for doubles in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::OpenAiClient;
