//! Test utilities for Vignette pipeline tests.
//!
//! This module provides doubles for every collaborator seam: stub text
//! collaborators, stub fetchers, and a recording encoder that stands in
//! for ffmpeg.

use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use vignette::{
    ComposeError, ComposeErrorKind, ComposeResult, CompositionSpec, ExtractError,
    ExtractErrorKind, ExtractResult, FetchMedia, KeywordExtractor, MediaAsset, MediaError,
    MediaErrorKind, MediaKind, MediaResult, Summarizer, SummarizeError, SummarizeErrorKind,
    SummarizeResult, VideoEncoder,
};

/// Summarizer double: fixed reply or fixed failure.
pub struct StubSummarizer {
    reply: Option<String>,
}

impl StubSummarizer {
    pub fn new_success(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }

    pub fn new_failure() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, _text: &str) -> SummarizeResult<String> {
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(SummarizeError::new(SummarizeErrorKind::ApiRequest(
                "stub summarizer failure".to_string(),
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

/// Keyword extractor double: one fixed keyword per intent.
pub struct StubExtractor {
    image_keyword: Option<String>,
    music_keyword: Option<String>,
}

impl StubExtractor {
    pub fn new(image_keyword: impl Into<String>, music_keyword: impl Into<String>) -> Self {
        Self {
            image_keyword: Some(image_keyword.into()),
            music_keyword: Some(music_keyword.into()),
        }
    }

    pub fn new_failure() -> Self {
        Self {
            image_keyword: None,
            music_keyword: None,
        }
    }
}

#[async_trait]
impl KeywordExtractor for StubExtractor {
    async fn extract_keyword(&self, _summary: &str, intent: MediaKind) -> ExtractResult<String> {
        let keyword = match intent {
            MediaKind::Image => &self.image_keyword,
            MediaKind::Music => &self.music_keyword,
        };
        keyword
            .clone()
            .ok_or_else(|| ExtractError::new(ExtractErrorKind::EmptyKeyword(intent.to_string())))
    }
}

/// Fetcher double: writes a marker file and records the keyword it saw,
/// or fails every call.
pub struct StubFetch {
    kind: MediaKind,
    url: Option<String>,
    pub seen_keywords: Arc<Mutex<Vec<String>>>,
}

impl StubFetch {
    pub fn new_success(kind: MediaKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: Some(url.into()),
            seen_keywords: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn new_failure(kind: MediaKind) -> Self {
        Self {
            kind,
            url: None,
            seen_keywords: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl FetchMedia for StubFetch {
    fn kind(&self) -> MediaKind {
        self.kind
    }

    async fn fetch(&self, keyword: &str, dest: &Path) -> MediaResult<MediaAsset> {
        self.seen_keywords
            .lock()
            .unwrap()
            .push(keyword.to_string());
        match &self.url {
            Some(url) => {
                std::fs::write(dest, b"stub-media-bytes")
                    .map_err(|e| MediaError::new(MediaErrorKind::Io(e.to_string())))?;
                Ok(MediaAsset::fetched(self.kind, url.clone(), dest))
            }
            None => Err(MediaError::new(MediaErrorKind::EmptyResults {
                provider: "stub",
                keyword: keyword.to_string(),
            })),
        }
    }
}

/// Encoder double: records every composition spec instead of running ffmpeg.
#[derive(Clone, Default)]
pub struct RecordingEncoder {
    specs: Arc<Mutex<Vec<CompositionSpec>>>,
    fail: bool,
}

impl RecordingEncoder {
    pub fn new_success() -> Self {
        Self::default()
    }

    pub fn new_failure() -> Self {
        Self {
            specs: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.specs.lock().unwrap().len()
    }

    pub fn recorded(&self) -> Vec<CompositionSpec> {
        self.specs.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoEncoder for RecordingEncoder {
    async fn encode(
        &self,
        spec: &CompositionSpec,
        _cancel: CancellationToken,
    ) -> ComposeResult<()> {
        self.specs.lock().unwrap().push(spec.clone());
        if self.fail {
            return Err(ComposeError::new(ComposeErrorKind::Encoding {
                exit: "code 1".to_string(),
                diagnostics: "stub encoder failure".to_string(),
            }));
        }
        Ok(())
    }
}
