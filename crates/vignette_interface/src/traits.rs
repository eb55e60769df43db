//! Capability traits for pipeline collaborators.

use async_trait::async_trait;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use vignette_core::{CompositionSpec, MediaAsset, MediaKind};
use vignette_error::{ComposeResult, ExtractResult, MediaResult, SummarizeResult};

/// Collaborator that condenses an input text into a short summary.
///
/// The summary feeds both keyword extractions and the caption burned into
/// the final video. Failure here is fatal to the pipeline run.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize the input text into a short, non-empty string.
    async fn summarize(&self, text: &str) -> SummarizeResult<String>;

    /// Provider name (e.g., "openai"), for logging.
    fn provider_name(&self) -> &'static str;
}

/// Collaborator that derives a single search keyword from a summary.
///
/// Invoked once per [`MediaKind`]: the kind is the intent tag and steers the
/// prompt towards an image-suited or music-suited keyword.
#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    /// Extract one trimmed keyword token from the summary for the given intent.
    async fn extract_keyword(&self, summary: &str, intent: MediaKind) -> ExtractResult<String>;
}

/// Search endpoint of one media provider.
///
/// Returns the direct-asset URL of exactly the first result in the
/// provider's returned ordering. No re-ranking or relevance scoring is
/// layered on top of what the provider returns.
#[async_trait]
pub trait MediaSearch: Send + Sync {
    /// The media kind this provider serves.
    fn kind(&self) -> MediaKind;

    /// Provider name (e.g., "unsplash", "jamendo"), for logging and errors.
    fn provider_name(&self) -> &'static str;

    /// Search for the keyword and return the first result's direct-asset URL.
    async fn search(&self, keyword: &str) -> MediaResult<String>;
}

/// Full media retrieval: search, download, and persist to a local path.
///
/// Exactly one file write per successful call; zero writes on failure.
/// The fallback resolver wraps this seam, so doubles of this trait exercise
/// both the degraded and the happy path of the pipeline.
#[async_trait]
pub trait FetchMedia: Send + Sync {
    /// The media kind this fetcher serves.
    fn kind(&self) -> MediaKind;

    /// Fetch the best match for `keyword` and persist it at `dest`.
    async fn fetch(&self, keyword: &str, dest: &Path) -> MediaResult<MediaAsset>;
}

/// The external encoding process behind the video composer.
///
/// Implementations must fully join the process lifecycle before returning
/// and must not leak a child process on success, failure, or cancellation.
#[async_trait]
pub trait VideoEncoder: Send + Sync {
    /// Run one encoding job to completion.
    ///
    /// Resolves once the output file at `spec.output_path()` is finalized.
    /// On cancellation the child process is terminated and any partial
    /// output is removed.
    async fn encode(&self, spec: &CompositionSpec, cancel: CancellationToken)
    -> ComposeResult<()>;
}
