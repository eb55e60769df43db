// Pipeline driver tests using collaborator doubles.
//
// These validate the end-to-end control flow without network access or a
// real media toolchain: composer inputs are verified from the recording
// encoder, not by media introspection.

mod test_utils;

use std::path::Path;
use test_utils::{RecordingEncoder, StubExtractor, StubFetch, StubSummarizer};
use tokio_util::sync::CancellationToken;
use vignette::{
    FallbackResolver, MediaKind, Pipeline, RunConfig, VignetteErrorKind,
};

fn run_config(dir: &Path) -> RunConfig {
    RunConfig::builder()
        .image_dest(dir.join("related_image.jpg"))
        .music_dest(dir.join("related_music.mp3"))
        .output_path(dir.join("output_video.mp4"))
        .font_path("Arial.ttf")
        .duration_secs(20u32)
        .build()
        .unwrap()
}

#[tokio::test]
async fn end_to_end_records_composer_inputs() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = run_config(dir.path());
    let image_fetch = StubFetch::new_success(MediaKind::Image, "https://img.test/cat.jpg");
    let music_fetch = StubFetch::new_success(MediaKind::Music, "https://mp3.test/jazz.mp3");
    let image_keywords = image_fetch.seen_keywords.clone();
    let music_keywords = music_fetch.seen_keywords.clone();
    let encoder = RecordingEncoder::new_success();

    let pipeline = Pipeline::new(
        StubSummarizer::new_success("summary-A"),
        StubExtractor::new("cat", "jazz"),
        FallbackResolver::new(image_fetch, dir.path().join("default_background.jpg")),
        FallbackResolver::new(music_fetch, dir.path().join("default_music.mp3")),
        encoder.clone(),
        config,
    );

    let report = pipeline.run("A", CancellationToken::new()).await?;

    // Each fetcher received the keyword extracted for its intent.
    assert_eq!(*image_keywords.lock().unwrap(), vec!["cat".to_string()]);
    assert_eq!(*music_keywords.lock().unwrap(), vec!["jazz".to_string()]);

    // Composer inputs, verified via the recorded spec.
    let specs = encoder.recorded();
    assert_eq!(specs.len(), 1);
    let spec = &specs[0];
    assert_eq!(spec.caption(), "summary-A");
    assert_eq!(*spec.duration_secs(), 20);
    assert_eq!(spec.image().local_path(), dir.path().join("related_image.jpg"));
    assert_eq!(spec.audio().local_path(), dir.path().join("related_music.mp3"));
    assert_eq!(spec.image().source_url(), Some("https://img.test/cat.jpg"));
    assert_eq!(spec.audio().source_url(), Some("https://mp3.test/jazz.mp3"));
    assert!(!spec.image().is_fallback());
    assert!(!spec.audio().is_fallback());

    // Both media artifacts were persisted at the configured destinations.
    assert!(dir.path().join("related_image.jpg").exists());
    assert!(dir.path().join("related_music.mp3").exists());

    assert_eq!(report.summary(), "summary-A");
    assert_eq!(report.output_path(), &dir.path().join("output_video.mp4"));
    Ok(())
}

#[tokio::test]
async fn image_provider_outage_still_produces_video() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = run_config(dir.path());
    let default_image = dir.path().join("default_background.jpg");
    let encoder = RecordingEncoder::new_success();

    let pipeline = Pipeline::new(
        StubSummarizer::new_success("summary-A"),
        StubExtractor::new("cat", "jazz"),
        FallbackResolver::new(StubFetch::new_failure(MediaKind::Image), &default_image),
        FallbackResolver::new(
            StubFetch::new_success(MediaKind::Music, "https://mp3.test/jazz.mp3"),
            dir.path().join("default_music.mp3"),
        ),
        encoder.clone(),
        config,
    );

    pipeline.run("A", CancellationToken::new()).await?;

    let specs = encoder.recorded();
    assert_eq!(specs.len(), 1);
    let spec = &specs[0];
    assert!(spec.image().is_fallback());
    assert_eq!(spec.image().local_path(), default_image);
    assert!(spec.image().source_url().is_none());
    // The music branch is unaffected by the image outage.
    assert!(!spec.audio().is_fallback());
    Ok(())
}

#[tokio::test]
async fn summarizer_failure_is_fatal_and_writes_nothing() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = run_config(dir.path());
    let encoder = RecordingEncoder::new_success();

    let pipeline = Pipeline::new(
        StubSummarizer::new_failure(),
        StubExtractor::new("cat", "jazz"),
        FallbackResolver::new(
            StubFetch::new_success(MediaKind::Image, "https://img.test/cat.jpg"),
            dir.path().join("default_background.jpg"),
        ),
        FallbackResolver::new(
            StubFetch::new_success(MediaKind::Music, "https://mp3.test/jazz.mp3"),
            dir.path().join("default_music.mp3"),
        ),
        encoder.clone(),
        config,
    );

    let err = pipeline
        .run("A", CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), VignetteErrorKind::Summarize(_)));
    assert_eq!(encoder.call_count(), 0);
    // No image, audio, or video file was created.
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}

#[tokio::test]
async fn extraction_failure_aborts_before_any_fetch() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = run_config(dir.path());
    let encoder = RecordingEncoder::new_success();

    let pipeline = Pipeline::new(
        StubSummarizer::new_success("summary-A"),
        StubExtractor::new_failure(),
        FallbackResolver::new(
            StubFetch::new_success(MediaKind::Image, "https://img.test/cat.jpg"),
            dir.path().join("default_background.jpg"),
        ),
        FallbackResolver::new(
            StubFetch::new_success(MediaKind::Music, "https://mp3.test/jazz.mp3"),
            dir.path().join("default_music.mp3"),
        ),
        encoder.clone(),
        config,
    );

    let err = pipeline
        .run("A", CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), VignetteErrorKind::Extract(_)));
    assert_eq!(encoder.call_count(), 0);
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}

#[tokio::test]
async fn compose_failure_is_reported_not_claimed_as_success() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = run_config(dir.path());
    let encoder = RecordingEncoder::new_failure();

    let pipeline = Pipeline::new(
        StubSummarizer::new_success("summary-A"),
        StubExtractor::new("cat", "jazz"),
        FallbackResolver::new(
            StubFetch::new_success(MediaKind::Image, "https://img.test/cat.jpg"),
            dir.path().join("default_background.jpg"),
        ),
        FallbackResolver::new(
            StubFetch::new_success(MediaKind::Music, "https://mp3.test/jazz.mp3"),
            dir.path().join("default_music.mp3"),
        ),
        encoder.clone(),
        config,
    );

    let err = pipeline
        .run("A", CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), VignetteErrorKind::Compose(_)));
    assert_eq!(encoder.call_count(), 1);
    // No video appeared at the output path.
    assert!(!dir.path().join("output_video.mp4").exists());
    Ok(())
}
