//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, ParseError, SchemaError, ValidationError};

/// Every failure the story pipeline can produce.
///
/// # Examples
///
/// ```
/// use storysmith_error::{StorysmithError, StorysmithErrorKind, ValidationError};
///
/// let err: StorysmithError = ValidationError::new("requirement_text is required").into();
/// assert!(matches!(err.kind(), StorysmithErrorKind::Validation(_)));
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorysmithErrorKind {
    /// Request body failed validation
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Candidate story failed schema validation
    #[from(SchemaError)]
    Schema(SchemaError),
    /// External completion service failed
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Model reply could not be turned into stories
    #[from(ParseError)]
    Parse(ParseError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Storysmith error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storysmith_error::{ConfigError, StorysmithResult};
///
/// fn load() -> StorysmithResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(load().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storysmith Error: {}", _0)]
pub struct StorysmithError(Box<StorysmithErrorKind>);

impl StorysmithError {
    /// Create a new error from a kind.
    pub fn new(kind: StorysmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorysmithErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StorysmithErrorKind
impl<T> From<T> for StorysmithError
where
    T: Into<StorysmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storysmith operations.
pub type StorysmithResult<T> = std::result::Result<T, StorysmithError>;
