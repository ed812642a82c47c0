//! Request and response envelopes for story generation.

use crate::Story;
use serde::{Deserialize, Serialize};
use storysmith_error::ValidationError;

/// Caller-supplied requirement to turn into stories.
///
/// # Examples
///
/// ```
/// use storysmith_core::RequirementRequest;
///
/// let request: RequirementRequest =
///     serde_json::from_str(r#"{"requirement_text": "As a user I want to log in"}"#).unwrap();
/// assert!(request.validate().is_ok());
/// assert_eq!(*request.project(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct RequirementRequest {
    /// Free-text requirement description
    requirement_text: String,
    /// Project identifier, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    project: Option<String>,
}

impl RequirementRequest {
    /// Create a request without a project.
    pub fn new(requirement_text: impl Into<String>) -> Self {
        Self {
            requirement_text: requirement_text.into(),
            project: None,
        }
    }

    /// Attach a project identifier.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Check the request before any work is done on it.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `requirement_text` is empty or only
    /// whitespace.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.requirement_text.trim().is_empty() {
            return Err(ValidationError::new("requirement_text must not be empty"));
        }
        Ok(())
    }
}

/// Response envelope for a generated story list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryResponse {
    /// Stories in the order the model produced them
    stories: Vec<Story>,
}

impl StoryResponse {
    /// Consume the envelope, returning the stories.
    pub fn into_stories(self) -> Vec<Story> {
        self.stories
    }
}

impl From<Vec<Story>> for StoryResponse {
    fn from(stories: Vec<Story>) -> Self {
        Self { stories }
    }
}
