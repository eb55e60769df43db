//! Failure isolation: substitute a default asset when a fetch fails.

use std::path::{Path, PathBuf};
use tracing::{info, warn};
use vignette_core::MediaAsset;
use vignette_error::MediaError;
use vignette_interface::FetchMedia;

/// Outcome of a fetch-with-fallback.
///
/// An explicit result type rather than a caught error, so call sites cannot
/// accidentally let a recoverable media failure become fatal: both variants
/// carry a usable asset.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The live fetch succeeded
    Fetched(MediaAsset),
    /// The fetch failed; a bundled default asset was substituted
    Recovered {
        /// The substituted fallback asset
        asset: MediaAsset,
        /// The swallowed failure, retained for logging and diagnostics
        error: MediaError,
    },
}

impl FetchOutcome {
    /// The asset to hand to the composer, real or fallback.
    pub fn asset(&self) -> &MediaAsset {
        match self {
            FetchOutcome::Fetched(asset) => asset,
            FetchOutcome::Recovered { asset, .. } => asset,
        }
    }

    /// Consume the outcome, returning the asset.
    pub fn into_asset(self) -> MediaAsset {
        match self {
            FetchOutcome::Fetched(asset) => asset,
            FetchOutcome::Recovered { asset, .. } => asset,
        }
    }

    /// Whether the default asset was substituted.
    pub fn is_recovered(&self) -> bool {
        matches!(self, FetchOutcome::Recovered { .. })
    }
}

/// Wraps a [`FetchMedia`] fetcher and makes it total.
///
/// `resolve` never fails: any error from the underlying fetch is logged and
/// swallowed here, and the run continues with the configured default asset.
/// This is the only place in the workspace where an error is recovered
/// locally; every other component propagates.
#[derive(Debug, Clone)]
pub struct FallbackResolver<F: FetchMedia> {
    fetcher: F,
    default_path: PathBuf,
}

impl<F: FetchMedia> FallbackResolver<F> {
    /// Creates a resolver substituting `default_path` on fetch failure.
    pub fn new(fetcher: F, default_path: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            default_path: default_path.into(),
        }
    }

    /// Fetch `keyword` into `dest`, falling back to the default asset.
    pub async fn resolve(&self, keyword: &str, dest: &Path) -> FetchOutcome {
        let kind = self.fetcher.kind();
        match self.fetcher.fetch(keyword, dest).await {
            Ok(asset) => {
                info!(kind = %kind, keyword = %keyword, "Fetched media");
                FetchOutcome::Fetched(asset)
            }
            Err(error) => {
                warn!(
                    kind = %kind,
                    keyword = %keyword,
                    error = %error,
                    fallback = %self.default_path.display(),
                    "Media fetch failed; substituting default asset"
                );
                FetchOutcome::Recovered {
                    asset: MediaAsset::fallback(kind, &self.default_path),
                    error,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use vignette_core::MediaKind;
    use vignette_error::{MediaErrorKind, MediaResult};

    struct AlwaysFails;

    #[async_trait]
    impl FetchMedia for AlwaysFails {
        fn kind(&self) -> MediaKind {
            MediaKind::Image
        }

        async fn fetch(&self, keyword: &str, _dest: &Path) -> MediaResult<MediaAsset> {
            Err(MediaError::new(MediaErrorKind::EmptyResults {
                provider: "unsplash",
                keyword: keyword.to_string(),
            }))
        }
    }

    struct AlwaysSucceeds;

    #[async_trait]
    impl FetchMedia for AlwaysSucceeds {
        fn kind(&self) -> MediaKind {
            MediaKind::Music
        }

        async fn fetch(&self, _keyword: &str, dest: &Path) -> MediaResult<MediaAsset> {
            Ok(MediaAsset::fetched(
                MediaKind::Music,
                "https://mp3.jamendo.com/11",
                dest,
            ))
        }
    }

    #[tokio::test]
    async fn failed_fetch_recovers_with_default_asset() {
        let resolver = FallbackResolver::new(AlwaysFails, "default_background.jpg");

        let outcome = resolver.resolve("cat", Path::new("related_image.jpg")).await;

        assert!(outcome.is_recovered());
        let asset = outcome.asset();
        assert!(asset.is_fallback());
        assert_eq!(asset.local_path(), Path::new("default_background.jpg"));
        assert!(asset.source_url().is_none());
    }

    #[tokio::test]
    async fn successful_fetch_passes_through() {
        let resolver = FallbackResolver::new(AlwaysSucceeds, "default_music.mp3");

        let outcome = resolver.resolve("jazz", Path::new("related_music.mp3")).await;

        assert!(!outcome.is_recovered());
        let asset = outcome.into_asset();
        assert!(!asset.is_fallback());
        assert_eq!(asset.local_path(), Path::new("related_music.mp3"));
        assert_eq!(asset.source_url(), Some("https://mp3.jamendo.com/11"));
    }
}
