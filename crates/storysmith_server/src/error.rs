//! Mapping pipeline failures onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use storysmith_error::{StorysmithError, StorysmithErrorKind};

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Machine-readable failure class
    pub error: &'static str,
    /// Human-readable message
    pub detail: String,
}

/// A pipeline error on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub StorysmithError);

impl ApiError {
    /// Status code and failure class for this error.
    ///
    /// Caller mistakes are 422. Upstream trouble is 502, or 503 when the
    /// provider failure is transient (rate limit or provider 5xx). A reply
    /// the model got wrong is 500.
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match self.0.kind() {
            StorysmithErrorKind::Validation(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error")
            }
            StorysmithErrorKind::Generation(e) if e.is_transient() => {
                (StatusCode::SERVICE_UNAVAILABLE, "generation_error")
            }
            StorysmithErrorKind::Generation(_) => (StatusCode::BAD_GATEWAY, "generation_error"),
            StorysmithErrorKind::Parse(_) | StorysmithErrorKind::Schema(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "parse_error")
            }
            StorysmithErrorKind::Config(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

/// Message for the caller, without source locations.
fn detail(kind: &StorysmithErrorKind) -> String {
    match kind {
        StorysmithErrorKind::Validation(e) => e.message.clone(),
        StorysmithErrorKind::Schema(e) => e.kind().to_string(),
        StorysmithErrorKind::Generation(e) => e.kind.to_string(),
        StorysmithErrorKind::Parse(e) => e.kind().to_string(),
        StorysmithErrorKind::Config(e) => e.message.clone(),
    }
}

impl<T> From<T> for ApiError
where
    T: Into<StorysmithError>,
{
    fn from(err: T) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.classify();
        let detail = detail(self.0.kind());

        if status.is_server_error() {
            tracing::error!(status = %status, error, detail = %detail, "Request failed");
        } else {
            tracing::warn!(status = %status, error, detail = %detail, "Request rejected");
        }

        (status, Json(ErrorBody { error, detail })).into_response()
    }
}
