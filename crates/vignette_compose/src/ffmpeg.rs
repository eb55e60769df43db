//! The ffmpeg-backed video encoder.

use crate::escape::escape_drawtext;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};
use vignette_core::CompositionSpec;
use vignette_error::{ComposeError, ComposeErrorKind, ComposeResult};
use vignette_interface::VideoEncoder;

const FONT_SIZE: u32 = 24;
const STDERR_TAIL_CHARS: usize = 2000;

/// Encoder driving an external ffmpeg process.
///
/// One invocation per job: the image looped for the spec's duration, the
/// audio muxed in unlooped, the caption burned in via drawtext, H.264 video
/// in yuv420p and AAC audio. Output goes to a `.part` staging path and is
/// renamed to the final path only after ffmpeg exits 0.
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    program: PathBuf,
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FfmpegEncoder {
    /// Creates an encoder resolving `ffmpeg` from PATH.
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("ffmpeg"),
        }
    }

    /// Creates an encoder with an explicit ffmpeg binary path.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

/// Staging path the process writes to before the output is finalized.
fn staging_path(output: &Path) -> PathBuf {
    let mut os = output.as_os_str().to_os_string();
    os.push(".part");
    PathBuf::from(os)
}

/// The drawtext filter string: caption centered with a semi-opaque box.
///
/// The text value is not quoted: inside a quoted section the filter
/// tokenizer copies literally until the next quote, so an escaped `\'`
/// would terminate the value early. The backslash escaping from
/// [`escape_drawtext`] is the complete unquoted form.
fn drawtext_filter(spec: &CompositionSpec) -> String {
    format!(
        "drawtext=fontfile={font}:text={text}:fontsize={size}:fontcolor=white:\
         x=(w-text_w)/2:y=(h-text_h)/2:box=1:boxcolor=black@0.5",
        font = escape_drawtext(&spec.font_path().display().to_string()),
        text = escape_drawtext(spec.caption()),
        size = FONT_SIZE,
    )
}

/// The full ffmpeg argument vector for one job.
///
/// The image input is looped; the audio input is not, so audio shorter than
/// the duration ends early and the video plays on silent, while longer audio
/// is truncated by `-t`.
fn build_args(spec: &CompositionSpec, staging: &Path) -> Vec<OsString> {
    let duration = spec.duration_secs().to_string();
    vec![
        OsString::from("-y"),
        OsString::from("-loop"),
        OsString::from("1"),
        OsString::from("-i"),
        spec.image().local_path().into(),
        OsString::from("-i"),
        spec.audio().local_path().into(),
        OsString::from("-vf"),
        OsString::from(drawtext_filter(spec)),
        OsString::from("-t"),
        OsString::from(duration),
        OsString::from("-c:v"),
        OsString::from("libx264"),
        OsString::from("-pix_fmt"),
        OsString::from("yuv420p"),
        OsString::from("-c:a"),
        OsString::from("aac"),
        // The staging path ends in .part, so the muxer cannot be guessed
        // from the extension and must be named explicitly.
        OsString::from("-f"),
        OsString::from("mp4"),
        staging.into(),
    ]
}

/// The last portion of the process stderr, for the rejection value.
fn stderr_tail(diagnostics: &str) -> String {
    let trimmed = diagnostics.trim_end();
    match trimmed.char_indices().nth_back(STDERR_TAIL_CHARS - 1) {
        Some((idx, _)) => trimmed[idx..].to_string(),
        None => trimmed.to_string(),
    }
}

#[async_trait]
impl VideoEncoder for FfmpegEncoder {
    #[instrument(skip(self, spec, cancel), fields(output = %spec.output_path().display()))]
    async fn encode(
        &self,
        spec: &CompositionSpec,
        cancel: CancellationToken,
    ) -> ComposeResult<()> {
        let staging = staging_path(spec.output_path());
        let args = build_args(spec, &staging);
        debug!(args = ?args, "Spawning encoder process");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                ComposeError::new(ComposeErrorKind::Spawn {
                    program: self.program.display().to_string(),
                    message: e.to_string(),
                })
            })?;

        // Drain stderr while the process runs; ffmpeg logs enough to fill
        // the pipe buffer and deadlock otherwise.
        let stderr = child.stderr.take();
        let drain = tokio::spawn(async move {
            let mut buf = String::new();
            if let Some(mut pipe) = stderr {
                let _ = pipe.read_to_string(&mut buf).await;
            }
            buf
        });

        let status = tokio::select! {
            status = child.wait() => {
                status.map_err(|e| ComposeError::new(ComposeErrorKind::Io(e.to_string())))?
            }
            _ = cancel.cancelled() => {
                warn!("Encoding cancelled; terminating child process");
                if let Err(e) = child.kill().await {
                    warn!(error = %e, "Failed to kill encoder process");
                }
                drain.abort();
                remove_partial(&staging).await;
                return Err(ComposeError::new(ComposeErrorKind::Cancelled));
            }
        };

        let diagnostics = drain.await.unwrap_or_default();

        if !status.success() {
            let exit = match status.code() {
                Some(code) => format!("code {code}"),
                None => "signal".to_string(),
            };
            remove_partial(&staging).await;
            return Err(ComposeError::new(ComposeErrorKind::Encoding {
                exit,
                diagnostics: stderr_tail(&diagnostics),
            }));
        }

        tokio::fs::rename(&staging, spec.output_path())
            .await
            .map_err(|e| ComposeError::new(ComposeErrorKind::Finalize(e.to_string())))?;

        info!(path = %spec.output_path().display(), "Video finalized");
        Ok(())
    }
}

/// Best-effort cleanup of the staging file after a failed or cancelled run.
async fn remove_partial(staging: &Path) {
    if let Err(e) = tokio::fs::remove_file(staging).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %staging.display(), error = %e, "Failed to remove partial output");
        }
    }
}
