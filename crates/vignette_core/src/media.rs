//! Media kinds and retrieved assets.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The two media kinds the pipeline acquires.
///
/// Doubles as the intent tag for keyword extraction: one keyword is derived
/// per kind from the same summary.
///
/// # Examples
///
/// ```
/// use vignette_core::MediaKind;
///
/// assert_eq!(format!("{}", MediaKind::Image), "image");
/// assert_eq!(format!("{}", MediaKind::Music), "music");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A still image used as the looped video frame
    #[display("image")]
    Image,
    /// A music track muxed in as the audio stream
    #[display("music")]
    Music,
}

/// A media file acquired for one pipeline run.
///
/// Created exactly once per kind per run, by either a live fetch or the
/// fallback substitution, and never mutated afterwards. The file at
/// `local_path` is write-once for the duration of the run.
///
/// # Examples
///
/// ```
/// use vignette_core::{MediaAsset, MediaKind};
///
/// let live = MediaAsset::fetched(
///     MediaKind::Image,
///     "https://images.example.com/cat.jpg",
///     "related_image.jpg",
/// );
/// assert!(!live.is_fallback());
///
/// let substitute = MediaAsset::fallback(MediaKind::Music, "default_music.mp3");
/// assert!(substitute.is_fallback());
/// assert!(substitute.source_url().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    kind: MediaKind,
    source_url: Option<String>,
    local_path: PathBuf,
    is_fallback: bool,
}

impl MediaAsset {
    /// An asset retrieved live from a provider and persisted locally.
    pub fn fetched(
        kind: MediaKind,
        source_url: impl Into<String>,
        local_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            kind,
            source_url: Some(source_url.into()),
            local_path: local_path.into(),
            is_fallback: false,
        }
    }

    /// A bundled default asset substituted after a failed fetch.
    pub fn fallback(kind: MediaKind, local_path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            source_url: None,
            local_path: local_path.into(),
            is_fallback: true,
        }
    }

    /// The media kind of this asset.
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// The provider URL the binary was downloaded from, if it was fetched live.
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    /// Path of the file on the local filesystem.
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// Whether this asset is a substituted default rather than a live fetch.
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }
}
