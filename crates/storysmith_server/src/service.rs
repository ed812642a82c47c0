//! The requirement → prompt → completion → stories pipeline.

use std::sync::Arc;
use storysmith_core::{RequirementRequest, Story, build_prompt, parse_stories};
use storysmith_error::StorysmithResult;
use storysmith_models::CompletionDriver;
use tracing::{info, instrument};

/// Runs one requirement through the model and validates the reply.
///
/// Holds no per-request state; clones share the same driver.
#[derive(Clone)]
pub struct StoryService {
    driver: Arc<dyn CompletionDriver>,
}

impl StoryService {
    /// Create a service around a completion driver.
    pub fn new(driver: Arc<dyn CompletionDriver>) -> Self {
        Self { driver }
    }

    /// Generate stories for a requirement.
    ///
    /// Validates the request, renders the prompt, makes exactly one
    /// completion call and parses the reply. Any failure fails the whole
    /// call; no partial list is ever returned.
    #[instrument(
        skip(self, request),
        fields(
            provider = self.driver.provider_name(),
            model = %self.driver.model_name(),
            project = request.project().as_deref().unwrap_or("-"),
            requirement_len = request.requirement_text().len(),
        )
    )]
    pub async fn generate(&self, request: &RequirementRequest) -> StorysmithResult<Vec<Story>> {
        request.validate()?;

        let prompt = build_prompt(request.requirement_text());
        let reply = self.driver.complete(&prompt).await?;
        let stories = parse_stories(&reply)?;

        info!(count = stories.len(), "Generated stories");
        Ok(stories)
    }
}

impl std::fmt::Debug for StoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryService")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .finish()
    }
}
