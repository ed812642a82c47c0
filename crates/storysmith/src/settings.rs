//! Layered configuration for the Storysmith binary.
//!
//! Sources, lowest precedence first:
//! 1. Bundled defaults (`storysmith.toml` at the workspace root)
//! 2. `~/.config/storysmith/storysmith.toml` (optional)
//! 3. `./storysmith.toml` (optional), or an explicit path (required)
//! 4. `STORYSMITH_<SECTION>__<KEY>` environment variables

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use std::path::Path;
use storysmith_error::{ConfigError, StorysmithResult};
use storysmith_models::ClientConfig;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../storysmith.toml");

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerSettings {
    /// Socket address to bind, e.g. "127.0.0.1:8000"
    pub bind: String,
}

/// Completion provider settings.
#[derive(Clone, PartialEq, Deserialize)]
pub struct LlmSettings {
    /// API root of the OpenAI-compatible provider
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Credential; falls back to `OPENAI_API_KEY`
    #[serde(default)]
    pub api_key: Option<String>,
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Completion length cap
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive, e.g. "info" or "storysmith_server=debug"
    pub level: String,
    /// Emit JSON lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

/// Top-level Storysmith configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StorysmithConfig {
    /// HTTP listener
    pub server: ServerSettings,
    /// Completion provider
    pub llm: LlmSettings,
    /// Logging
    pub logging: LoggingSettings,
}

impl StorysmithConfig {
    /// Load configuration with full precedence.
    ///
    /// When `explicit` is given it replaces `./storysmith.toml` and must exist.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> StorysmithResult<Self> {
        debug!("Loading configuration: env > file > home dir > bundled defaults");

        let mut builder = defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storysmith/storysmith.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = match explicit {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("storysmith").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("STORYSMITH")
                .prefix_separator("_")
                .separator("__"),
        );

        finish(builder)
    }

    /// Load bundled defaults overlaid with a TOML document, ignoring the
    /// environment and user files.
    pub fn from_toml_str(overrides: &str) -> StorysmithResult<Self> {
        finish(defaults().add_source(File::from_str(overrides, FileFormat::Toml)))
    }

    /// Build the immutable provider configuration.
    ///
    /// # Errors
    ///
    /// Fails when no API key is configured in either `llm.api_key` or
    /// `OPENAI_API_KEY`, or when the settings are rejected by the builder.
    pub fn client_config(&self) -> StorysmithResult<ClientConfig> {
        let api_key = resolve_api_key(
            self.llm.api_key.as_deref(),
            std::env::var(API_KEY_ENV).ok(),
        )?;

        let mut builder = ClientConfig::builder();
        builder
            .api_key(api_key)
            .base_url(self.llm.base_url.clone())
            .model(self.llm.model.clone());
        if let Some(temperature) = self.llm.temperature {
            builder.temperature(temperature);
        }
        if let Some(max_tokens) = self.llm.max_tokens {
            builder.max_tokens(max_tokens);
        }

        Ok(builder
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid llm settings: {}", e)))?)
    }
}

/// Pick the credential: configured value first, then the environment.
///
/// Blank values count as unset at either level.
pub fn resolve_api_key(
    configured: Option<&str>,
    from_env: Option<String>,
) -> Result<String, ConfigError> {
    configured
        .filter(|key| !key.trim().is_empty())
        .map(str::to_string)
        .or_else(|| from_env.filter(|key| !key.trim().is_empty()))
        .ok_or_else(|| {
            ConfigError::new(format!(
                "No API key configured: set {} or llm.api_key",
                API_KEY_ENV
            ))
        })
}

fn defaults() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> StorysmithResult<StorysmithConfig> {
    Ok(builder
        .build()
        .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
        .try_deserialize()
        .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?)
}
