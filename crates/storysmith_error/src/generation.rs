//! Error types for the external completion service.

/// Error kinds for completion requests.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Transport-level failure (connect, TLS, timeout)
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// Provider rejected the credential
    #[display("Unauthorized: {}", _0)]
    Unauthorized(String),

    /// Provider quota or rate limit exceeded
    #[display("Rate limited: {}", _0)]
    RateLimited(String),

    /// Any other non-success status from the provider
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Provider error message or response body
        message: String,
    },

    /// Success status but the body is not a chat completion
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),

    /// No choices, or the first choice carries no text
    #[display("Completion contained no text content")]
    EmptyCompletion,
}

/// Error wrapper with location tracking.
///
/// # Examples
///
/// ```
/// use storysmith_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::RateLimited("slow down".into()));
/// assert!(err.is_transient());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The error kind
    pub kind: GenerationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the failure is likely to clear up on its own.
    ///
    /// Rate limits and provider-side 5xx answers qualify. Nothing in the
    /// pipeline retries; the HTTP layer reports these as 503 so callers know
    /// a later attempt may succeed.
    pub fn is_transient(&self) -> bool {
        match &self.kind {
            GenerationErrorKind::RateLimited(_) => true,
            GenerationErrorKind::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result type for completion requests.
pub type GenerationResult<T> = Result<T, GenerationError>;
