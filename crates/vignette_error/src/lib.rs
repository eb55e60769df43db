//! Error types for the Vignette video pipeline.
//!
//! This crate provides the foundation error types used throughout the Vignette
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The propagation policy is strict: only the fallback boundary in
//! `vignette_media` recovers from a [`MediaError`]; every other component
//! propagates failures upward unchanged.
//!
//! # Examples
//!
//! ```
//! use vignette_error::{VignetteResult, HttpError};
//!
//! fn fetch_data() -> VignetteResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod compose;
mod config;
mod error;
mod extract;
mod http;
mod io;
mod media;
mod summarize;

pub use builder::{BuilderError, BuilderErrorKind};
pub use compose::{ComposeError, ComposeErrorKind, ComposeResult};
pub use config::ConfigError;
pub use error::{VignetteError, VignetteErrorKind, VignetteResult};
pub use extract::{ExtractError, ExtractErrorKind, ExtractResult};
pub use http::HttpError;
pub use io::IoError;
pub use media::{MediaError, MediaErrorKind, MediaResult};
pub use summarize::{SummarizeError, SummarizeErrorKind, SummarizeResult};
