//! HTTP routes for story generation.

use crate::{ApiError, StoryService};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use storysmith_core::{RequirementRequest, StoryResponse};
use storysmith_error::ValidationError;

/// API state shared by every handler.
#[derive(Clone, Debug)]
pub struct ApiState {
    service: StoryService,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(service: StoryService) -> Self {
        Self { service }
    }
}

/// Creates the story API router.
///
/// - `GET /` reports that the API is up
/// - `POST /stories/generate` turns a requirement into stories
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/stories/generate", post(generate_stories))
        .with_state(state)
}

/// Health check endpoint.
async fn root() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "API is running"})))
}

/// Generate stories for the posted requirement.
async fn generate_stories(
    State(state): State<ApiState>,
    payload: Result<Json<RequirementRequest>, JsonRejection>,
) -> Result<Json<StoryResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ValidationError::new(rejection.body_text()))?;

    let stories = state.service.generate(&request).await?;
    Ok(Json(StoryResponse::from(stories)))
}

/// Serve the router until `shutdown` resolves.
///
/// In-flight requests are allowed to finish after the signal.
pub async fn serve<F>(
    listener: tokio::net::TcpListener,
    router: Router,
    shutdown: F,
) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Story API listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
