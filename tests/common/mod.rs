#![allow(dead_code)]

use async_trait::async_trait;
use newsgist::agent::{AgentError, TextGenerator};
use newsgist::Config;
use std::sync::Mutex;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const STOCKS_PAGE: &str =
    "<html><body><p>Stocks rose today.</p><p>Analysts are optimistic.</p></body></html>";

pub fn init_test_tracing() {
    newsgist::logging::init();
}

/// Config with short timeouts and no API key.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.fetch.timeout_secs = 2;
    config
}

/// Serve `html` at `/article` and return the server.
pub async fn article_server(html: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;
    server
}

/// Generator that returns its prompt and remembers every prompt it saw.
#[derive(Default)]
pub struct EchoGenerator {
    pub prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AgentError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(prompt.to_string())
    }

    fn model_name(&self) -> &str {
        "echo"
    }
}

/// Generator that always fails like an unreachable service.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, AgentError> {
        Err(AgentError::Api {
            status: 503,
            body: "service unavailable".to_string(),
        })
    }

    fn model_name(&self) -> &str {
        "failing"
    }
}
