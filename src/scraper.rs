//! Article fetching and paragraph extraction.
//!
//! Uses reqwest for fetching and scraper for HTML parsing.

use crate::config::FetchConfig;
use lazy_static::lazy_static;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use thiserror::Error;

lazy_static! {
    static ref PARAGRAPH: Selector = Selector::parse("p").expect("static selector");
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to fetch news from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Text extracted from a news article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// The original URL
    pub url: String,
    /// Paragraph text joined by single spaces
    pub text: String,
}

impl Article {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Fetches article pages with a shared, preconfigured HTTP client.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// Fetch a page and extract its paragraph text.
    ///
    /// The URL is passed to the client untouched, so a malformed URL fails
    /// the same way an unreachable one does. The body is parsed regardless
    /// of the response status.
    pub async fn fetch(&self, url: &str) -> Result<Article, FetchError> {
        let request_failed = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_failed)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "article request returned non-success status");
        }

        let html = response.text().await.map_err(request_failed)?;
        let article = Article {
            url: url.to_string(),
            text: extract_paragraphs(&html),
        };

        if article.is_empty() {
            tracing::info!(%url, bytes = html.len(), "page has no paragraph text");
        } else {
            tracing::debug!(
                %url,
                bytes = html.len(),
                chars = article.text.chars().count(),
                "extracted article text"
            );
        }

        Ok(article)
    }
}

/// Join the text of every `<p>` element, in document order, with single spaces.
///
/// Text inside each paragraph is kept exactly as the parser yields it; no
/// whitespace cleanup or filtering is applied.
pub fn extract_paragraphs(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .select(&PARAGRAPH)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
