//! Fetch-then-summarise flow shared by the web UI and the CLI.

use crate::agent::{AgentError, GeminiClient, Summarizer, TextGenerator};
use crate::config::{Config, ConfigError};
use crate::scraper::{Article, FetchError, Fetcher};
use crate::summary::Summary;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Summarize(#[from] AgentError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Which step of the pipeline failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Setup,
    Fetch,
    Summarize,
}

impl PipelineError {
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Config(_) => Stage::Setup,
            PipelineError::Fetch(_) => Stage::Fetch,
            PipelineError::Summarize(_) => Stage::Summarize,
        }
    }
}

/// An article together with its summary.
#[derive(Debug, Clone)]
pub struct Digest {
    pub article: Article,
    pub summary: Summary,
}

/// Fetcher and summarizer built once and shared by every request.
#[derive(Clone)]
pub struct Pipeline {
    fetcher: Fetcher,
    summarizer: Summarizer,
}

impl Pipeline {
    pub fn new(fetcher: Fetcher, summarizer: Summarizer) -> Self {
        Self {
            fetcher,
            summarizer,
        }
    }

    /// Build the production pipeline (Gemini backed) from configuration
    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        if config.agent.provider != "gemini" {
            return Err(ConfigError::UnsupportedProvider(config.agent.provider.clone()).into());
        }
        if config.api_key().is_none() {
            tracing::warn!("no Gemini API key configured; summaries will fail until one is set");
        }
        let generator = GeminiClient::new(&config.agent, config.api.gemini_key.clone())?;
        Self::with_generator(config, Arc::new(generator))
    }

    /// Build a pipeline around a caller-supplied generator
    pub fn with_generator(
        config: &Config,
        generator: Arc<dyn TextGenerator>,
    ) -> Result<Self, PipelineError> {
        let fetcher = Fetcher::new(&config.fetch)?;
        let summarizer = Summarizer::new(generator, config.prompt_template()?);
        Ok(Self::new(fetcher, summarizer))
    }

    /// Fetch the article at `url` and summarise it.
    ///
    /// A fetch failure returns before any generation request is made.
    pub async fn run(&self, url: &str) -> Result<Digest, PipelineError> {
        let article = self.fetcher.fetch(url).await?;
        let summary = self.summarizer.summarize(&article.text).await?;
        Ok(Digest { article, summary })
    }
}
