//! Top-level error wrapper types.

use crate::{
    BuilderError, ComposeError, ConfigError, ExtractError, HttpError, IoError, MediaError,
    SummarizeError,
};

/// This is the foundation error enum for the Vignette workspace.
///
/// Every pipeline stage converts into this enum at the driver boundary.
/// The variants mirror the error taxonomy: configuration failures are fatal
/// before any step runs, summarization/extraction failures abort the run,
/// media failures are recoverable (and normally never reach this type), and
/// composition failures abort the run after media acquisition.
///
/// # Examples
///
/// ```
/// use vignette_error::{VignetteError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: VignetteError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VignetteErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error (missing credentials)
    #[from(ConfigError)]
    Config(ConfigError),
    /// Summarization error (fatal pipeline error)
    #[from(SummarizeError)]
    Summarize(SummarizeError),
    /// Keyword extraction error (fatal pipeline error)
    #[from(ExtractError)]
    Extract(ExtractError),
    /// Media retrieval error (recoverable at the fallback boundary)
    #[from(MediaError)]
    Media(MediaError),
    /// Video composition error (fatal pipeline error)
    #[from(ComposeError)]
    Compose(ComposeError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Local filesystem error
    #[from(IoError)]
    Io(IoError),
}

/// Vignette error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vignette_error::{VignetteResult, ConfigError};
///
/// fn might_fail() -> VignetteResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vignette Error: {}", _0)]
pub struct VignetteError(Box<VignetteErrorKind>);

impl VignetteError {
    /// Create a new error from a kind.
    pub fn new(kind: VignetteErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VignetteErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VignetteErrorKind
impl<T> From<T> for VignetteError
where
    T: Into<VignetteErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vignette operations.
///
/// # Examples
///
/// ```
/// use vignette_error::{VignetteResult, HttpError};
///
/// fn fetch_data() -> VignetteResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type VignetteResult<T> = std::result::Result<T, VignetteError>;
