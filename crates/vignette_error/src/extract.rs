//! Keyword extraction error types.

/// Keyword-extraction-specific error conditions.
///
/// Like summarization, extraction failure is fatal to a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExtractErrorKind {
    /// API request failed before a response was received
    #[display("Keyword extraction request failed: {}", _0)]
    ApiRequest(String),
    /// Non-success HTTP response from the language model API
    #[display("Keyword extraction HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Model response contained no keyword token
    #[display("Model returned no keyword for intent '{}'", _0)]
    EmptyKeyword(String),
    /// Response body could not be decoded
    #[display("Failed to decode keyword response: {}", _0)]
    Decode(String),
}

/// Keyword extraction error with source location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{ExtractError, ExtractErrorKind};
///
/// let err = ExtractError::new(ExtractErrorKind::EmptyKeyword("music".to_string()));
/// assert!(format!("{}", err).contains("music"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extract Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractError {
    /// The kind of error that occurred
    pub kind: ExtractErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExtractError {
    /// Create a new ExtractError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for keyword extraction operations.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
