//! Storysmith: free-text requirements in, validated user stories out.
//!
//! This facade re-exports the workspace crates and adds what the binary
//! needs on top: layered configuration and logging setup.
//!
//! ```no_run
//! use std::sync::Arc;
//! use storysmith::{OpenAiClient, RequirementRequest, StoryService, StorysmithConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = StorysmithConfig::load(None)?;
//! let service = StoryService::new(Arc::new(OpenAiClient::new(settings.client_config()?)));
//!
//! let stories = service
//!     .generate(&RequirementRequest::new("As a user I want to reset my password"))
//!     .await?;
//! for story in &stories {
//!     println!("{}: {}", story.title(), story.description());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod observability;
mod settings;

pub use observability::{ObservabilityConfig, ObservabilityGuard, init_observability_with_config};
pub use settings::{
    API_KEY_ENV, LlmSettings, LoggingSettings, ServerSettings, StorysmithConfig, resolve_api_key,
};

pub use storysmith_core::{
    PROMPT_TEMPLATE, RequirementRequest, Story, StoryResponse, build_prompt, parse_stories,
};
pub use storysmith_error::{
    ConfigError, GenerationError, GenerationErrorKind, ParseError, ParseErrorKind, SchemaError,
    SchemaErrorKind, StorysmithError, StorysmithErrorKind, StorysmithResult, ValidationError,
};
pub use storysmith_models::{ClientConfig, CompletionDriver, OpenAiClient};
pub use storysmith_server::{ApiError, ApiState, StoryService, create_router, serve};
