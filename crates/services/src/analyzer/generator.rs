use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Remote text generation: prompt in, free text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    /// Generate text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` for any transport, status, timeout, or empty-body failure.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl GeneratorConfig {
    /// Read `FLAGS_AI_*` variables. Returns `None` without an API key.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("FLAGS_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("FLAGS_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = env::var("FLAGS_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// OpenAI-compatible `/chat/completions` client.
///
/// Request deadlines are enforced by the caller, only the connect phase is bounded here.
#[derive(Clone)]
pub struct HttpTextGenerator {
    client: Client,
    config: Option<GeneratorConfig>,
}

impl HttpTextGenerator {
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(GeneratorConfig::from_env())
    }

    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be built.
    pub fn new(config: Option<GeneratorConfig>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    fn model(&self) -> &str {
        self.config.as_ref().map_or(DEFAULT_MODEL, |c| c.model.as_str())
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let config = self.config.as_ref().ok_or(GenerationError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(classify)?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await.map_err(classify)?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GenerationError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

fn classify(err: reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::Http(err)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
