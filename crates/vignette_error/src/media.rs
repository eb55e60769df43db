//! Media retrieval error types.
//!
//! All of these conditions are recoverable: the fallback resolver in
//! `vignette_media` catches them, logs, and substitutes a bundled default
//! asset. They must never propagate past that boundary.

/// Media-retrieval-specific error conditions.
///
/// The three spec-visible failure classes are distinguishable:
/// empty results, failed binary download, and provider/transport errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MediaErrorKind {
    /// Provider search returned zero results for the keyword
    #[display("{} returned no results for '{}'", provider, keyword)]
    EmptyResults {
        /// Provider name (e.g., "unsplash", "jamendo")
        provider: &'static str,
        /// The search keyword
        keyword: String,
    },
    /// Non-success response from the provider search endpoint
    #[display("{} search failed with HTTP {}: {}", provider, status_code, message)]
    Provider {
        /// Provider name
        provider: &'static str,
        /// HTTP status code
        status_code: u16,
        /// Error body returned by the provider
        message: String,
    },
    /// The binary asset transfer was not successful
    #[display("Download of '{}' failed with HTTP {}", url, status_code)]
    Download {
        /// The direct asset URL
        url: String,
        /// HTTP status code
        status_code: u16,
    },
    /// Transport-level failure (connection, TLS, timeout)
    #[display("Media request failed: {}", _0)]
    Http(String),
    /// Provider response could not be decoded
    #[display("Failed to decode {} response: {}", provider, message)]
    Decode {
        /// Provider name
        provider: &'static str,
        /// Decode failure detail
        message: String,
    },
    /// Local filesystem failure while persisting the asset
    #[display("Failed to write media file: {}", _0)]
    Io(String),
}

/// Media retrieval error with source location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{MediaError, MediaErrorKind};
///
/// let err = MediaError::new(MediaErrorKind::EmptyResults {
///     provider: "jamendo",
///     keyword: "jazz".to_string(),
/// });
/// assert!(format!("{}", err).contains("jazz"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", kind, line, file)]
pub struct MediaError {
    /// The kind of error that occurred
    pub kind: MediaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MediaError {
    /// Create a new MediaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for media retrieval operations.
pub type MediaResult<T> = std::result::Result<T, MediaError>;
