//! Video composition error types.

/// Composition-specific error conditions.
///
/// Encoding failure is fatal to the run. The partial output never reaches
/// the final path: the encoder writes to a temporary path and renames only
/// after the process exits successfully.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ComposeErrorKind {
    /// The encoding process could not be started
    #[display("Failed to spawn encoder process '{}': {}", program, message)]
    Spawn {
        /// The program that failed to start
        program: String,
        /// OS-level failure detail
        message: String,
    },
    /// The encoding process exited with a non-zero status
    #[display("Encoder exited with {}: {}", exit, diagnostics)]
    Encoding {
        /// Exit status description ("code 1", "signal")
        exit: String,
        /// Tail of the process stderr output
        diagnostics: String,
    },
    /// Encoding was cancelled by an external signal
    #[display("Encoding cancelled")]
    Cancelled,
    /// Finalizing the output file failed after a successful encode
    #[display("Failed to finalize output file: {}", _0)]
    Finalize(String),
    /// Local filesystem failure during composition
    #[display("Composition I/O failure: {}", _0)]
    Io(String),
}

/// Video composition error with source location tracking.
///
/// # Examples
///
/// ```
/// use vignette_error::{ComposeError, ComposeErrorKind};
///
/// let err = ComposeError::new(ComposeErrorKind::Cancelled);
/// assert!(format!("{}", err).contains("cancelled"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Compose Error: {} at line {} in {}", kind, line, file)]
pub struct ComposeError {
    /// The kind of error that occurred
    pub kind: ComposeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ComposeError {
    /// Create a new ComposeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ComposeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for video composition operations.
pub type ComposeResult<T> = std::result::Result<T, ComposeError>;
