//! Summarization error types.

/// Summarization-specific error conditions.
///
/// Summarization failure is fatal to a pipeline run: no partial output is
/// written and the run aborts before any media is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SummarizeErrorKind {
    /// API request failed before a response was received
    #[display("Summarization request failed: {}", _0)]
    ApiRequest(String),
    /// Non-success HTTP response from the language model API
    #[display("Summarization HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Model returned no usable text
    #[display("Model returned an empty summary")]
    EmptyResponse,
    /// Response body could not be decoded
    #[display("Failed to decode summarization response: {}", _0)]
    Decode(String),
}

/// Summarization error with source location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{SummarizeError, SummarizeErrorKind};
///
/// let err = SummarizeError::new(SummarizeErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("empty summary"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Summarize Error: {} at line {} in {}", kind, line, file)]
pub struct SummarizeError {
    /// The kind of error that occurred
    pub kind: SummarizeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SummarizeError {
    /// Create a new SummarizeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SummarizeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for summarization operations.
pub type SummarizeResult<T> = std::result::Result<T, SummarizeError>;
