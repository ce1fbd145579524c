//! LLM agent module for article summarisation.
//!
//! The [`Summarizer`] renders the prompt and hands it to a [`TextGenerator`];
//! [`GeminiClient`] is the generator used in production.

pub use crate::summary::Summary;

use crate::config::AgentConfig;
use crate::prompt::PromptTemplate;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Header carrying the API key; keeps it out of request URLs.
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("no API key configured; set GEMINI_API_KEY or GOOGLE_API_KEY")]
    MissingApiKey,
    #[error("LLM request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("LLM API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    ParseError(String),
    #[error("LLM returned no candidates")]
    EmptyResponse,
    #[error("response blocked by safety filters")]
    Blocked,
}

/// A remote service that completes a text prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AgentError>;

    fn model_name(&self) -> &str;
}

/// Turns article text into a summary using a prompt template and a generator.
#[derive(Clone)]
pub struct Summarizer {
    generator: Arc<dyn TextGenerator>,
    template: PromptTemplate,
}

impl Summarizer {
    pub fn new(generator: Arc<dyn TextGenerator>, template: PromptTemplate) -> Self {
        Self {
            generator,
            template,
        }
    }

    /// Run the summarisation prompt on the provided text
    pub async fn summarize(&self, article: &str) -> Result<Summary, AgentError> {
        let prompt = self.template.render(article);
        tracing::info!(
            model = self.generator.model_name(),
            chars = article.chars().count(),
            "requesting summary"
        );
        let text = self.generator.generate(&prompt).await?;
        Ok(Summary::new(text, self.generator.model_name()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Google Gemini `generateContent` client.
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    temperature: f32,
}

impl GeminiClient {
    /// Build a client from agent settings.
    ///
    /// A missing key is accepted here and reported when generating.
    pub fn new(config: &AgentConfig, api_key: Option<String>) -> Result<Self, AgentError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .finish()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AgentError> {
        let api_key = self.api_key.as_deref().ok_or(AgentError::MissingApiKey)?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        let url = self.endpoint();
        tracing::debug!(%url, "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| AgentError::ParseError(format!("{}: {}", e, body)))?;

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or(AgentError::EmptyResponse)?;

        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Err(AgentError::Blocked);
        }

        // Empty text is returned as is.
        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
