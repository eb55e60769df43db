//! Vignette - text to narrated video.
//!
//! Vignette turns an arbitrary input text into a short video: it summarizes
//! the text, derives one search keyword each for a still image and a music
//! track, fetches that media from Unsplash and Jamendo (substituting bundled
//! defaults when a provider fails), and composites image + caption + audio
//! into a single H.264/AAC file via an external ffmpeg process.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vignette::{
//!     FallbackResolver, FfmpegEncoder, JamendoSearch, MediaFetcher, OpenAiClient,
//!     Pipeline, RunConfig, UnsplashSearch,
//! };
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let llm = OpenAiClient::from_env()?;
//!     let pipeline = Pipeline::new(
//!         llm.clone(),
//!         llm,
//!         FallbackResolver::new(
//!             MediaFetcher::new(UnsplashSearch::from_env()?),
//!             "default_background.jpg",
//!         ),
//!         FallbackResolver::new(
//!             MediaFetcher::new(JamendoSearch::from_env()?),
//!             "default_music.mp3",
//!         ),
//!         FfmpegEncoder::new(),
//!         RunConfig::builder().build()?,
//!     );
//!
//!     let report = pipeline.run("text to narrate", CancellationToken::new()).await?;
//!     println!("Video at {}", report.output_path().display());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vignette is organized as a workspace with focused crates:
//!
//! - `vignette_core` - Core data types (MediaAsset, CompositionSpec)
//! - `vignette_interface` - Capability traits for every collaborator
//! - `vignette_error` - Error types
//! - `vignette_text` - Language-model summarizer and keyword extractor
//! - `vignette_media` - Provider search, fetching, and fallback
//! - `vignette_compose` - ffmpeg composition
//!
//! This crate (`vignette`) re-exports everything and hosts the pipeline
//! driver and the CLI binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pipeline;

pub use pipeline::{Pipeline, RunConfig, RunConfigBuilder, RunReport};

pub use vignette_compose::*;
pub use vignette_core::*;
pub use vignette_error::*;
pub use vignette_interface::*;
pub use vignette_media::*;
pub use vignette_text::*;
