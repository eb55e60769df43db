//! Unsplash image search provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};
use vignette_core::MediaKind;
use vignette_error::{ConfigError, MediaError, MediaErrorKind, MediaResult};
use vignette_interface::MediaSearch;

const PROVIDER: &str = "unsplash";
const RANDOM_PHOTO_URL: &str = "https://api.unsplash.com/photos/random";

#[derive(Debug, Clone, Deserialize)]
struct RandomPhoto {
    urls: PhotoUrls,
}

#[derive(Debug, Clone, Deserialize)]
struct PhotoUrls {
    regular: Option<String>,
}

impl RandomPhoto {
    /// First-result selection: the random endpoint returns one photo, whose
    /// `urls.regular` field is the direct-asset URL.
    fn direct_url(self, keyword: &str) -> MediaResult<String> {
        self.urls.regular.ok_or_else(|| {
            MediaError::new(MediaErrorKind::EmptyResults {
                provider: PROVIDER,
                keyword: keyword.to_string(),
            })
        })
    }
}

/// Unsplash random-photo search client.
///
/// Queries the random-photo endpoint with the keyword and the access key,
/// preserving the original selection policy: whatever single photo the
/// provider returns is the result.
#[derive(Debug, Clone)]
pub struct UnsplashSearch {
    client: Client,
    access_key: String,
}

impl UnsplashSearch {
    /// Creates a client from the `UNSPLASH_ACCESS_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the key is not set.
    #[instrument(skip_all)]
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_key = std::env::var("UNSPLASH_ACCESS_KEY")
            .map_err(|_| ConfigError::new("UNSPLASH_ACCESS_KEY environment variable not set"))?;
        Ok(Self::with_access_key(access_key))
    }

    /// Creates a client with a specific access key.
    pub fn with_access_key(access_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            access_key: access_key.into(),
        }
    }
}

#[async_trait]
impl MediaSearch for UnsplashSearch {
    fn kind(&self) -> MediaKind {
        MediaKind::Image
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    #[instrument(skip(self))]
    async fn search(&self, keyword: &str) -> MediaResult<String> {
        let url = format!(
            "{}?query={}&client_id={}",
            RANDOM_PHOTO_URL,
            urlencoding::encode(keyword),
            self.access_key
        );

        debug!("Searching Unsplash for a random photo");

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

        let photo: RandomPhoto = response.json().await.map_err(|e| {
            MediaError::new(MediaErrorKind::Decode {
                provider: PROVIDER,
                message: e.to_string(),
            })
        })?;

        photo.direct_url(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_decodes_regular_url() -> anyhow::Result<()> {
        let body = r#"{
            "id": "abc123",
            "urls": {
                "raw": "https://images.unsplash.com/raw",
                "regular": "https://images.unsplash.com/photo-1?w=1080"
            }
        }"#;

        let photo: RandomPhoto = serde_json::from_str(body)?;
        let url = photo.direct_url("cat")?;
        assert_eq!(url, "https://images.unsplash.com/photo-1?w=1080");
        Ok(())
    }

    #[test]
    fn missing_url_field_is_empty_results() -> anyhow::Result<()> {
        let body = r#"{"urls": {"raw": "https://images.unsplash.com/raw"}}"#;
        let photo: RandomPhoto = serde_json::from_str(body)?;

        let err = photo.direct_url("cat").unwrap_err();
        assert!(matches!(
            err.kind,
            MediaErrorKind::EmptyResults { provider: "unsplash", .. }
        ));
        Ok(())
    }
}
