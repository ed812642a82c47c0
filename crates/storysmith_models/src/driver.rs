//! Seam between the story pipeline and a completion provider.

use async_trait::async_trait;
use storysmith_error::GenerationResult;

/// A text-in, text-out completion backend.
///
/// One call is one attempt: implementations must not retry on their own.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Send `prompt` as a single user message and return the first
    /// completion's text verbatim.
    async fn complete(&self, prompt: &str) -> GenerationResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}
