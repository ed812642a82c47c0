//! Errors raised while turning a model reply into stories.

use crate::SchemaError;

/// Ways a model reply can fail to become a story list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ParseErrorKind {
    /// Reply is not valid JSON
    #[display("failed to parse reply as JSON: {} (raw reply: {:?})", message, raw)]
    Syntax {
        /// Parser diagnostic
        message: String,
        /// The reply exactly as received
        raw: String,
    },

    /// Reply is valid JSON but not an array
    #[display("failed to parse reply: expected array, found {}", found)]
    NotArray {
        /// JSON type that was found instead
        found: String,
    },

    /// An array element failed schema validation
    #[display("failed to parse story at index {}: {}", index, error)]
    InvalidStory {
        /// Position of the offending element
        index: usize,
        /// Underlying schema violation
        error: SchemaError,
    },
}

/// Parse error with location tracking.
///
/// # Examples
///
/// ```
/// use storysmith_error::{ParseError, ParseErrorKind};
///
/// let err = ParseError::new(ParseErrorKind::NotArray { found: "object".into() });
/// assert!(format!("{}", err).contains("expected array"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Parse Error: {} at line {} in {}", kind, line, file)]
pub struct ParseError {
    kind: ParseErrorKind,
    line: u32,
    file: &'static str,
}

impl ParseError {
    /// Create a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}
