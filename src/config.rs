//! Configuration loading and management for newsgist.
//!
//! Settings come from an optional `newsgist.toml`, with environment variable
//! overrides for the API key. Every field has a default, so running without
//! a config file is fine.

use crate::prompt::PromptTemplate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variables checked for the Gemini API key, in priority order.
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("prompt template must contain the {{article}} placeholder")]
    InvalidTemplate,
    #[error("unsupported LLM provider: {0}")]
    UnsupportedProvider(String),
}

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// LLM provider, only "gemini" is supported
    pub provider: String,
    /// Model identifier (e.g., "gemini-1.5-flash")
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Base URL of the generation API
    pub base_url: String,
    /// Prompt template override; must contain `{article}`
    pub prompt: Option<String>,
}

/// API keys configuration (loaded from environment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub gemini_key: Option<String>,
}

/// Article fetching settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Timeout for the whole article request
    pub timeout_secs: u64,
    /// User-Agent header sent with article requests
    pub user_agent: String,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the web UI listens on
    pub bind: String,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from the default location, falling back to defaults
    /// when no config file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::parse_file(&path)?
            }
            None => Config::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::parse_file(path)?;
        config.apply_env();
        Ok(config)
    }

    fn parse_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string, without environment overrides
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        // Reject a bad template up front rather than on the first request.
        config.prompt_template()?;
        Ok(config)
    }

    /// Override API keys from environment variables
    fn apply_env(&mut self) {
        if let Some(key) = API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
        {
            self.api.gemini_key = Some(key);
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from("newsgist.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        dirs::home_dir()
            .map(|home| home.join(".config").join("newsgist").join("newsgist.toml"))
            .filter(|path| path.exists())
    }

    /// Get the API key for the configured provider, if any
    pub fn api_key(&self) -> Option<&str> {
        self.api.gemini_key.as_deref()
    }

    /// Build the prompt template, using the configured override if present
    pub fn prompt_template(&self) -> Result<PromptTemplate, ConfigError> {
        match &self.agent.prompt {
            Some(template) => PromptTemplate::new(template.clone()),
            None => Ok(PromptTemplate::default()),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.7,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            prompt: None,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!("newsgist/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8501".to_string(),
        }
    }
}
