//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Vignette - turn a text into a short narrated video
#[derive(Parser, Debug)]
#[command(name = "vignette")]
#[command(about = "Turn a text into a short narrated video", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input text file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Path of the encoded output video
    #[arg(long, default_value = "output_video.mp4")]
    pub output: PathBuf,

    /// Total video duration in seconds
    #[arg(long, default_value_t = 20)]
    pub duration: u32,

    /// Where the fetched image is persisted
    #[arg(long, default_value = "related_image.jpg")]
    pub image_dest: PathBuf,

    /// Where the fetched music track is persisted
    #[arg(long, default_value = "related_music.mp3")]
    pub music_dest: PathBuf,

    /// Substitute image used when the live fetch fails
    #[arg(long, default_value = "default_background.jpg")]
    pub default_image: PathBuf,

    /// Substitute music used when the live fetch fails
    #[arg(long, default_value = "default_music.mp3")]
    pub default_music: PathBuf,

    /// Font file for the caption overlay
    #[arg(long, default_value = "Arial.ttf")]
    pub font: PathBuf,

    /// Language model identifier for summarization and keywords
    #[arg(long)]
    pub model: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
