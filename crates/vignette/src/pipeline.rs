//! The pipeline driver.
//!
//! Sequences the stages in fixed order: summarize, extract keywords,
//! acquire media, compose. The two keyword extractions have no data
//! dependency on each other and run concurrently, as do the two
//! fetch-with-fallback calls once both keywords are known. The only
//! branching is the fallback substitution inside the resolvers.

use derive_getters::Getters;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::info;
use vignette_core::{CompositionSpec, MediaAsset, MediaKind};
use vignette_error::{BuilderError, VignetteError, VignetteResult};
use vignette_interface::{FetchMedia, KeywordExtractor, Summarizer, VideoEncoder};
use vignette_media::FallbackResolver;

/// File locations and duration for one pipeline run.
///
/// Defaults mirror the bundled asset layout: artifacts land in the working
/// directory and the fallback assets and font are expected beside them.
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct RunConfig {
    /// Where the fetched image is persisted
    image_dest: PathBuf,
    /// Where the fetched music track is persisted
    music_dest: PathBuf,
    /// Final path of the encoded video
    output_path: PathBuf,
    /// Font used for the caption overlay
    font_path: PathBuf,
    /// Total video duration in seconds
    duration_secs: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            image_dest: PathBuf::from("related_image.jpg"),
            music_dest: PathBuf::from("related_music.mp3"),
            output_path: PathBuf::from("output_video.mp4"),
            font_path: PathBuf::from("Arial.ttf"),
            duration_secs: 20,
        }
    }
}

impl RunConfig {
    /// Create a builder for a run configuration.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }
}

/// What one successful run produced, for logging and assertions.
#[derive(Debug, Clone, Getters)]
pub struct RunReport {
    /// The generated summary (also the burned-in caption)
    summary: String,
    /// The image asset handed to the composer
    image: MediaAsset,
    /// The audio asset handed to the composer
    audio: MediaAsset,
    /// Where the finalized video was written
    output_path: PathBuf,
}

/// Drives one text-to-video run across the collaborator seams.
///
/// Generic over every collaborator, so the full flow is testable with
/// doubles: a recording encoder stands in for ffmpeg, stub fetchers for the
/// providers, stub text collaborators for the language model.
pub struct Pipeline<S, K, FI, FM, E>
where
    S: Summarizer,
    K: KeywordExtractor,
    FI: FetchMedia,
    FM: FetchMedia,
    E: VideoEncoder,
{
    summarizer: S,
    extractor: K,
    image: FallbackResolver<FI>,
    music: FallbackResolver<FM>,
    encoder: E,
    config: RunConfig,
}

impl<S, K, FI, FM, E> Pipeline<S, K, FI, FM, E>
where
    S: Summarizer,
    K: KeywordExtractor,
    FI: FetchMedia,
    FM: FetchMedia,
    E: VideoEncoder,
{
    /// Assemble a pipeline from its collaborators.
    pub fn new(
        summarizer: S,
        extractor: K,
        image: FallbackResolver<FI>,
        music: FallbackResolver<FM>,
        encoder: E,
        config: RunConfig,
    ) -> Self {
        Self {
            summarizer,
            extractor,
            image,
            music,
            encoder,
            config,
        }
    }

    /// Run the pipeline over the source text.
    ///
    /// Summarization and keyword extraction failures abort the run before
    /// any file is written. Media failures never abort (the resolvers
    /// substitute defaults). Composition failure aborts with no file at the
    /// final output path.
    pub async fn run(&self, text: &str, cancel: CancellationToken) -> VignetteResult<RunReport> {
        info!(
            provider = self.summarizer.provider_name(),
            "Summarizing source text"
        );
        let summary = self.summarizer.summarize(text).await?;
        info!(summary = %summary, "Summary generated");

        let (image_keyword, music_keyword) = tokio::try_join!(
            async {
                self.extractor
                    .extract_keyword(&summary, MediaKind::Image)
                    .await
                    .map_err(VignetteError::from)
            },
            async {
                self.extractor
                    .extract_keyword(&summary, MediaKind::Music)
                    .await
                    .map_err(VignetteError::from)
            },
        )?;
        info!(image = %image_keyword, music = %music_keyword, "Keywords extracted");

        let (image_outcome, music_outcome) = tokio::join!(
            self.image.resolve(&image_keyword, self.config.image_dest()),
            self.music.resolve(&music_keyword, self.config.music_dest()),
        );

        let spec = CompositionSpec::builder()
            .image(image_outcome.into_asset())
            .audio(music_outcome.into_asset())
            .caption(summary.clone())
            .duration_secs(*self.config.duration_secs())
            .output_path(self.config.output_path().clone())
            .font_path(self.config.font_path().clone())
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        info!(duration_secs = spec.duration_secs(), "Composing video");
        self.encoder.encode(&spec, cancel).await?;

        Ok(RunReport {
            summary,
            image: spec.image().clone(),
            audio: spec.audio().clone(),
            output_path: spec.output_path().clone(),
        })
    }
}
