//! Connection settings for an OpenAI-compatible completion API

use derive_builder::Builder;
use storysmith_error::ConfigError;

/// Default API root for OpenAI
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Immutable client configuration, fixed at startup.
///
/// # Examples
///
/// ```
/// use storysmith_models::{ClientConfig, DEFAULT_MODEL};
///
/// let config = ClientConfig::builder()
///     .api_key("sk-test")
///     .temperature(0.2_f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model(), DEFAULT_MODEL);
/// assert_eq!(*config.temperature(), Some(0.2));
/// assert!(!format!("{:?}", config).contains("sk-test"));
/// ```
#[derive(Clone, PartialEq, Builder, derive_getters::Getters)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ClientConfig {
    /// API root, e.g. "https://api.openai.com/v1"
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Model identifier used for every request
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Bearer credential
    #[getter(skip)]
    api_key: String,
    /// Sampling temperature, provider default when unset
    #[builder(setter(into, strip_option), default)]
    temperature: Option<f32>,
    /// Completion length cap, provider default when unset
    #[builder(setter(into, strip_option), default)]
    max_tokens: Option<u32>,
}

impl ClientConfig {
    /// Creates a new config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `OPENAI_API_KEY` (required)
    /// - `OPENAI_BASE_URL` (default: [`DEFAULT_BASE_URL`])
    /// - `OPENAI_MODEL` (default: [`DEFAULT_MODEL`])
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::new("OPENAI_API_KEY not set"))?;

        let mut builder = Self::builder();
        builder.api_key(api_key);
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            builder.base_url(base_url);
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            builder.model(model);
        }

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid client configuration: {}", e)))
    }

    /// Full URL of the chat completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl ClientConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(key) = &self.api_key {
            if key.trim().is_empty() {
                return Err("api_key must not be empty".to_string());
            }
        }
        if let Some(model) = &self.model {
            if model.trim().is_empty() {
                return Err("model must not be empty".to_string());
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}
