//! Trait definitions for the Vignette video pipeline.
//!
//! Every external collaborator of the pipeline is modeled as a capability
//! trait so the driver can be exercised end-to-end with test doubles:
//! language-model collaborators ([`Summarizer`], [`KeywordExtractor`]),
//! media providers ([`MediaSearch`], [`FetchMedia`]), and the encoding
//! process ([`VideoEncoder`]).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{FetchMedia, KeywordExtractor, MediaSearch, Summarizer, VideoEncoder};
