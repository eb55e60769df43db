//! OpenAI chat-completions client.

use super::dto::{ChatMessage, ChatRequest, ChatResponse};
use super::prompts;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use vignette_core::MediaKind;
use vignette_error::{
    ConfigError, ExtractError, ExtractErrorKind, ExtractResult, SummarizeError,
    SummarizeErrorKind, SummarizeResult,
};
use vignette_interface::{KeywordExtractor, Summarizer};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f32 = 0.5;

/// Internal failure of one chat call, mapped to the caller's error kind.
#[derive(Debug, Clone)]
enum ChatFailure {
    Request(String),
    Status { status_code: u16, message: String },
    Decode(String),
    Empty,
}

/// OpenAI chat-completions client implementing both text collaborators.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// Creates a client from the `OPENAI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the key is not set. This is checked at
    /// startup, before any pipeline step runs.
    #[instrument(skip_all)]
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::new("OPENAI_API_KEY environment variable not set"))?;
        Ok(Self::with_api_key(api_key, DEFAULT_MODEL))
    }

    /// Creates a client with a specific API key and model.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    /// Override the API base URL (self-hosted or proxy endpoints).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Send one prompt and return the first choice's text.
    async fn chat(&self, prompt: String) -> Result<String, ChatFailure> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: TEMPERATURE,
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, model = %self.model, "Sending chat-completions request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatFailure::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ChatFailure::Status {
                status_code,
                message,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| ChatFailure::Decode(e.to_string()))?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ChatFailure::Empty)
    }
}

#[async_trait]
impl Summarizer for OpenAiClient {
    #[instrument(skip(self, text))]
    async fn summarize(&self, text: &str) -> SummarizeResult<String> {
        let reply = self
            .chat(prompts::summary_prompt(text))
            .await
            .map_err(|failure| {
                SummarizeError::new(match failure {
                    ChatFailure::Request(message) => SummarizeErrorKind::ApiRequest(message),
                    ChatFailure::Status {
                        status_code,
                        message,
                    } => SummarizeErrorKind::HttpError {
                        status_code,
                        message,
                    },
                    ChatFailure::Decode(message) => SummarizeErrorKind::Decode(message),
                    ChatFailure::Empty => SummarizeErrorKind::EmptyResponse,
                })
            })?;

        debug!(length = reply.len(), "Received summary");
        Ok(reply.trim().to_string())
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[async_trait]
impl KeywordExtractor for OpenAiClient {
    #[instrument(skip(self, summary))]
    async fn extract_keyword(&self, summary: &str, intent: MediaKind) -> ExtractResult<String> {
        let reply = self
            .chat(prompts::keyword_prompt(summary, intent))
            .await
            .map_err(|failure| {
                ExtractError::new(match failure {
                    ChatFailure::Request(message) => ExtractErrorKind::ApiRequest(message),
                    ChatFailure::Status {
                        status_code,
                        message,
                    } => ExtractErrorKind::HttpError {
                        status_code,
                        message,
                    },
                    ChatFailure::Decode(message) => ExtractErrorKind::Decode(message),
                    ChatFailure::Empty => ExtractErrorKind::EmptyKeyword(intent.to_string()),
                })
            })?;

        let keyword = prompts::first_token(&reply)
            .ok_or_else(|| ExtractError::new(ExtractErrorKind::EmptyKeyword(intent.to_string())))?;

        debug!(keyword = %keyword, intent = %intent, "Extracted keyword");
        Ok(keyword)
    }
}
