//! Video composition via an external ffmpeg process.
//!
//! Composes a single still image, an audio track, and a caption overlay into
//! a fixed-duration H.264/AAC video. The encoding job is one ffmpeg
//! invocation whose lifecycle is fully joined before returning: the child is
//! never left running, and the output file only reaches its final path after
//! the process exits successfully.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod escape;
mod ffmpeg;

pub use escape::escape_drawtext;
pub use ffmpeg::FfmpegEncoder;
