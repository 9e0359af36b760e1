//! Configuration for the paper search assistant.

use std::time::Duration;

/// Semantic Scholar API constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 4;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Chat model constants.
pub mod llm {
    use std::time::Duration;

    /// OpenAI-compatible API root.
    pub const BASE_URL: &str = "https://api.openai.com/v1";

    /// Model used when none is configured.
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

    /// Completion request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    /// Sampling temperature for both the search agent and the critic.
    pub const TEMPERATURE: f32 = 0.0;
}

/// Conversation and evaluation defaults.
pub mod session {
    use std::time::Duration;

    /// Text that ends a Search Agent turn.
    pub const TERMINATION_SENTINEL: &str = "TERMINATE";

    /// Upper bound on dispatcher auto-replies within one task.
    pub const MAX_CONSECUTIVE_AUTO_REPLY: usize = 10;

    /// Exchanges allowed per canned prompt in the evaluation harness.
    pub const EVALUATION_MAX_TURNS: usize = 3;

    /// Pause between canned prompts.
    pub const EVALUATION_DELAY: Duration = Duration::from_secs(5);
}

/// Paper field sets for API requests.
pub mod fields {
    /// Fields needed to build a paper record.
    pub const RECORD: &[&str] =
        &["paperId", "title", "abstract", "year", "citationCount", "url", "authors"];
}

/// Chat model configuration.
#[derive(Clone)]
pub struct LlmConfig {
    /// API key for the chat backend.
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API (without `/chat/completions`).
    pub base_url: String,

    /// Model name.
    pub model: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Request timeout.
    pub request_timeout: Duration,
}

impl LlmConfig {
    /// Create a configuration for the default endpoint.
    #[must_use]
    pub fn new(api_key: Option<String>, model: Option<String>) -> Self {
        Self {
            api_key,
            base_url: llm::BASE_URL.to_string(),
            model: model.unwrap_or_else(|| llm::DEFAULT_MODEL.to_string()),
            temperature: llm::TEMPERATURE,
            request_timeout: llm::REQUEST_TIMEOUT,
        }
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("has_api_key", &self.api_key.is_some())
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Chat model settings.
    pub llm: LlmConfig,
}

impl Config {
    /// Create a new configuration.
    #[must_use]
    pub fn new(api_key: Option<String>, llm: LlmConfig) -> Self {
        Self {
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            llm,
        }
    }

    /// Create a test configuration pointing both backends at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            llm: LlmConfig {
                api_key: Some("test-key".to_string()),
                base_url: format!("{}/v1", base_url),
                model: "test-model".to_string(),
                temperature: 0.0,
                request_timeout: Duration::from_secs(5),
            },
        }
    }

    /// Create configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let api_key = non_empty_var("SEMANTIC_SCHOLAR_API_KEY");
        let mut llm = LlmConfig::new(non_empty_var("OPENAI_API_KEY"), non_empty_var("OPENAI_MODEL"));
        if let Some(base_url) = non_empty_var("OPENAI_BASE_URL") {
            llm = llm.with_base_url(base_url);
        }

        Ok(Self::new(api_key, llm))
    }

    /// Check if a Semantic Scholar API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, LlmConfig::new(None, None))
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("has_api_key", &self.has_api_key())
            .field("graph_api_url", &self.graph_api_url)
            .field("llm", &self.llm)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.llm.model, llm::DEFAULT_MODEL);
    }

    #[test]
    fn test_config_debug_hides_keys() {
        let config = Config::new(
            Some("s2-secret".to_string()),
            LlmConfig::new(Some("sk-secret".to_string()), None),
        );
        let debug = format!("{config:?}");
        assert!(!debug.contains("s2-secret"));
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("has_api_key"));
    }

    #[test]
    fn test_fields() {
        assert!(fields::RECORD.contains(&"paperId"));
        assert!(fields::RECORD.contains(&"url"));
        assert!(fields::RECORD.contains(&"authors"));
    }
}
