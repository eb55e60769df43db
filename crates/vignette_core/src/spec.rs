//! The composition spec handed to the video encoder.

use crate::MediaAsset;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The fully-resolved set of inputs for one encoding job.
///
/// Built by the pipeline driver immediately before invoking the encoder,
/// after both media assets exist (real or fallback). The spec fully
/// determines the job: image looped for `duration_secs`, audio muxed in
/// unlooped, caption burned into the frame.
///
/// # Examples
///
/// ```
/// use vignette_core::{CompositionSpec, MediaAsset, MediaKind};
///
/// let spec = CompositionSpec::builder()
///     .image(MediaAsset::fetched(MediaKind::Image, "https://i.example/x.jpg", "img.jpg"))
///     .audio(MediaAsset::fallback(MediaKind::Music, "default_music.mp3"))
///     .caption("A short summary")
///     .duration_secs(20u32)
///     .output_path("output_video.mp4")
///     .font_path("Arial.ttf")
///     .build()
///     .unwrap();
///
/// assert_eq!(*spec.duration_secs(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct CompositionSpec {
    /// The still image shown for the whole video
    image: MediaAsset,
    /// The audio track; not looped, truncated at `duration_secs`
    audio: MediaAsset,
    /// Summary text rendered as the on-screen overlay
    caption: String,
    /// Total output duration in seconds
    duration_secs: u32,
    /// Final path of the encoded video
    output_path: PathBuf,
    /// Font file used by the text overlay
    font_path: PathBuf,
}

impl CompositionSpec {
    /// Create a builder for a composition spec.
    pub fn builder() -> CompositionSpecBuilder {
        CompositionSpecBuilder::default()
    }
}
