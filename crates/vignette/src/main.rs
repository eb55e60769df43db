//! Vignette CLI binary.
//!
//! Reads a source text, runs the text-to-video pipeline, and exits with:
//! 0 on success, 1 on a runtime pipeline failure, 2 on a configuration
//! failure (missing credentials), before any pipeline step runs.

use clap::Parser;
use std::io::Read;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use vignette::{
    FallbackResolver, FfmpegEncoder, IoError, JamendoSearch, MediaFetcher, OpenAiClient,
    Pipeline, RunConfig, RunReport, UnsplashSearch, VignetteErrorKind, VignetteResult,
};

mod cli;

const EXIT_RUNTIME: u8 = 1;
const EXIT_CONFIG: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Load credentials from a .env file if one is present.
    dotenvy::dotenv().ok();

    match run(cli).await {
        Ok(report) => {
            info!(
                output = %report.output_path().display(),
                image_fallback = report.image().is_fallback(),
                audio_fallback = report.audio().is_fallback(),
                "Pipeline complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Pipeline failed");
            match e.kind() {
                VignetteErrorKind::Config(_) => ExitCode::from(EXIT_CONFIG),
                _ => ExitCode::from(EXIT_RUNTIME),
            }
        }
    }
}

async fn run(cli: cli::Cli) -> VignetteResult<RunReport> {
    // All three credentials are checked before any pipeline step.
    let llm = OpenAiClient::from_env()?;
    let llm = match &cli.model {
        Some(model) => llm.with_model(model),
        None => llm,
    };
    let image_search = UnsplashSearch::from_env()?;
    let music_search = JamendoSearch::from_env()?;

    let text = read_source_text(cli.input.as_deref())?;

    let config = RunConfig::builder()
        .image_dest(cli.image_dest)
        .music_dest(cli.music_dest)
        .output_path(cli.output)
        .font_path(cli.font)
        .duration_secs(cli.duration)
        .build()
        .map_err(|e| vignette::BuilderError::from(e.to_string()))?;

    let pipeline = Pipeline::new(
        llm.clone(),
        llm,
        FallbackResolver::new(MediaFetcher::new(image_search), cli.default_image),
        FallbackResolver::new(MediaFetcher::new(music_search), cli.default_music),
        FfmpegEncoder::new(),
        config,
    );

    // Ctrl-C terminates the encoder child and cleans up partial output.
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    pipeline.run(&text, cancel).await
}

/// Read the source text from the input file, or stdin when omitted.
fn read_source_text(input: Option<&std::path::Path>) -> Result<String, IoError> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| IoError::new(format!("Failed to read {}: {}", path.display(), e))),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| IoError::new(format!("Failed to read stdin: {}", e)))?;
            Ok(text)
        }
    }
}
