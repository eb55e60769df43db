//! Configuration error types.

/// Configuration error with source location.
///
/// Raised at startup when a required credential is missing, before any
/// pipeline step runs.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vignette_error::ConfigError;
    ///
    /// let err = ConfigError::new("UNSPLASH_ACCESS_KEY not set");
    /// assert!(err.message.contains("UNSPLASH_ACCESS_KEY"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
