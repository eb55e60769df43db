//! Shared media retrieval over a provider search client.

use async_trait::async_trait;
use reqwest::Client;
use std::path::Path;
use tracing::{debug, info, instrument};
use vignette_core::{MediaAsset, MediaKind};
use vignette_error::{MediaError, MediaErrorKind, MediaResult};
use vignette_interface::{FetchMedia, MediaSearch};

/// Write `bytes` to `dest` atomically, replacing any existing file.
///
/// The bytes land in a temporary file in the destination's directory first
/// and are renamed over `dest` once fully written, so `dest` never holds a
/// partial download or a mix of old and new content.
///
/// # Errors
///
/// Returns an I/O error if the temporary file cannot be created, written,
/// or persisted.
pub fn write_atomic(dest: &Path, bytes: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    let dir = dest
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

/// Retrieves one media binary per call: search, download, persist.
///
/// Generic over the provider's [`MediaSearch`] client; the image and music
/// fetchers are two instances of this type sharing the same contract.
/// Exactly one file write happens per successful call and none on failure.
#[derive(Debug, Clone)]
pub struct MediaFetcher<S: MediaSearch> {
    search: S,
    client: Client,
}

impl<S: MediaSearch> MediaFetcher<S> {
    /// Creates a fetcher over the given provider search client.
    pub fn new(search: S) -> Self {
        Self {
            search,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<S: MediaSearch> FetchMedia for MediaFetcher<S> {
    fn kind(&self) -> MediaKind {
        self.search.kind()
    }

    #[instrument(skip(self), fields(provider = self.search.provider_name()))]
    async fn fetch(&self, keyword: &str, dest: &Path) -> MediaResult<MediaAsset> {
        let url = self.search.search(keyword).await?;
        debug!(url = %url, "Selected first result");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MediaError::new(MediaErrorKind::Http(e.to_string())))?;

        if !response.status().is_success() {
            return Err(MediaError::new(MediaErrorKind::Download {
                url,
                status_code: response.status().as_u16(),
            }));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| MediaError::new(MediaErrorKind::Http(e.to_string())))?;

        write_atomic(dest, &bytes).map_err(|e| MediaError::new(MediaErrorKind::Io(e.to_string())))?;

        info!(
            kind = %self.search.kind(),
            bytes = bytes.len(),
            path = %dest.display(),
            "Media saved"
        );

        Ok(MediaAsset::fetched(self.search.kind(), url, dest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_atomic_creates_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let dest = dir.path().join("asset.jpg");

        write_atomic(&dest, b"image-bytes")?;

        assert_eq!(std::fs::read(&dest)?, b"image-bytes");
        Ok(())
    }

    #[test]
    fn write_atomic_overwrite_leaves_no_residue() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let dest = dir.path().join("asset.jpg");

        write_atomic(&dest, b"a much longer first version of the file")?;
        write_atomic(&dest, b"short")?;

        // The second write fully replaces the first; no tail of the longer
        // content survives.
        assert_eq!(std::fs::read(&dest)?, b"short");
        Ok(())
    }

    #[test]
    fn write_atomic_leaves_no_temp_files_behind() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let dest = dir.path().join("asset.mp3");

        write_atomic(&dest, b"audio")?;

        let entries: Vec<_> = std::fs::read_dir(dir.path())?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<Result<_, _>>()?;
        assert_eq!(entries, vec![std::ffi::OsString::from("asset.mp3")]);
        Ok(())
    }
}
