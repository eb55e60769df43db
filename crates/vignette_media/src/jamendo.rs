//! Jamendo music track search provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};
use vignette_core::MediaKind;
use vignette_error::{ConfigError, MediaError, MediaErrorKind, MediaResult};
use vignette_interface::MediaSearch;

const PROVIDER: &str = "jamendo";
const TRACKS_URL: &str = "https://api.jamendo.com/v3.0/tracks/";

#[derive(Debug, Clone, Deserialize)]
struct TrackSearch {
    results: Vec<Track>,
}

#[derive(Debug, Clone, Deserialize)]
struct Track {
    audio: String,
}

impl TrackSearch {
    /// First-result selection over the provider's own ordering. An empty
    /// result array is distinguishable from transport and API errors.
    fn direct_url(self, keyword: &str) -> MediaResult<String> {
        self.results
            .into_iter()
            .next()
            .map(|track| track.audio)
            .ok_or_else(|| {
                MediaError::new(MediaErrorKind::EmptyResults {
                    provider: PROVIDER,
                    keyword: keyword.to_string(),
                })
            })
    }
}

/// Jamendo track search client.
///
/// Queries the tracks endpoint with `limit=1`, so the provider's top-ranked
/// track for the keyword is the result.
#[derive(Debug, Clone)]
pub struct JamendoSearch {
    client: Client,
    client_id: String,
}

impl JamendoSearch {
    /// Creates a client from the `JAMENDO_CLIENT_ID` environment variable.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the id is not set.
    #[instrument(skip_all)]
    pub fn from_env() -> Result<Self, ConfigError> {
        let client_id = std::env::var("JAMENDO_CLIENT_ID")
            .map_err(|_| ConfigError::new("JAMENDO_CLIENT_ID environment variable not set"))?;
        Ok(Self::with_client_id(client_id))
    }

    /// Creates a client with a specific client id.
    pub fn with_client_id(client_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            client_id: client_id.into(),
        }
    }
}

#[async_trait]
impl MediaSearch for JamendoSearch {
    fn kind(&self) -> MediaKind {
        MediaKind::Music
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    #[instrument(skip(self))]
    async fn search(&self, keyword: &str) -> MediaResult<String> {
        let url = format!(
            "{}?client_id={}&format=json&limit=1&search={}",
            TRACKS_URL,
            self.client_id,
            urlencoding::encode(keyword)
        );

        debug!("Searching Jamendo tracks");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MediaError::new(MediaErrorKind::Http(e.to_string())))?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(MediaError::new(MediaErrorKind::Provider {
                provider: PROVIDER,
                status_code,
                message,
            }));
        }

        let tracks: TrackSearch = response.json().await.map_err(|e| {
            MediaError::new(MediaErrorKind::Decode {
                provider: PROVIDER,
                message: e.to_string(),
            })
        })?;

        tracks.direct_url(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_decodes_first_track_audio() -> anyhow::Result<()> {
        let body = r#"{
            "headers": {"status": "success", "results_count": 2},
            "results": [
                {"id": "11", "name": "Smooth", "audio": "https://mp3.jamendo.com/11"},
                {"id": "12", "name": "Later", "audio": "https://mp3.jamendo.com/12"}
            ]
        }"#;

        let tracks: TrackSearch = serde_json::from_str(body)?;
        let url = tracks.direct_url("jazz")?;
        assert_eq!(url, "https://mp3.jamendo.com/11");
        Ok(())
    }

    #[test]
    fn empty_results_is_distinguishable() -> anyhow::Result<()> {
        let body = r#"{"results": []}"#;
        let tracks: TrackSearch = serde_json::from_str(body)?;

        let err = tracks.direct_url("jazz").unwrap_err();
        assert!(matches!(
            err.kind,
            MediaErrorKind::EmptyResults { provider: "jamendo", .. }
        ));
        Ok(())
    }
}
