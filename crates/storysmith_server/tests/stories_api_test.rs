//! End-to-end tests for the story routes with a stubbed completion driver.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use storysmith_core::{RequirementRequest, StoryResponse};
use storysmith_error::{GenerationError, GenerationErrorKind, GenerationResult};
use storysmith_models::CompletionDriver;
use storysmith_server::{ApiState, StoryService, create_router};
use tower::ServiceExt;

const PASSWORD_RESET_REPLY: &str = r#"[{"title":"Password reset","description":"User can reset password via email link","acceptance_criteria":["Link expires in 1 hour","Email sent on request"],"story_points":3,"labels":["auth"],"epic":null}]"#;

/// Answers every prompt the same way and remembers what it was asked.
struct StubDriver {
    reply: GenerationResult<String>,
    prompts: Mutex<Vec<String>>,
}

impl StubDriver {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing(kind: GenerationErrorKind) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(GenerationError::new(kind)),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionDriver for StubDriver {
    async fn complete(&self, prompt: &str) -> GenerationResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

fn app(driver: Arc<StubDriver>) -> Router {
    create_router(ApiState::new(StoryService::new(driver)))
}

async fn post_json(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/stories/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn root_reports_api_running() {
    let response = app(StubDriver::replying("[]"))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"message": "API is running"}));
}

#[tokio::test]
async fn password_reset_requirement_yields_one_story() {
    let driver = StubDriver::replying(PASSWORD_RESET_REPLY);
    let (status, body) = post_json(
        app(driver.clone()),
        r#"{"requirement_text": "As a user I want to reset my password"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "stories": [{
                "title": "Password reset",
                "description": "User can reset password via email link",
                "acceptance_criteria": ["Link expires in 1 hour", "Email sent on request"],
                "story_points": 3,
                "labels": ["auth"],
                "epic": null
            }]
        })
    );

    let prompts = driver.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("As a user I want to reset my password"));
}

#[tokio::test]
async fn project_is_accepted_and_ignored() {
    let driver = StubDriver::replying("[]");
    let (status, body) = post_json(
        app(driver.clone()),
        r#"{"requirement_text": "Export invoices", "project": "billing"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"stories": []}));
    assert!(!driver.prompts()[0].contains("billing"));
}

#[tokio::test]
async fn prose_reply_is_a_parse_failure() {
    let (status, body) = post_json(
        app(StubDriver::replying("Sorry, I cannot help with that.")),
        r#"{"requirement_text": "As a user I want to reset my password"}"#,
    )
    .await;

    assert!(status.is_server_error());
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "parse_error");
    assert!(body["detail"].as_str().unwrap().contains("parse"));
}

#[tokio::test]
async fn one_invalid_story_fails_the_request() {
    let reply = json!([
        {"title": "Valid story", "description": "a", "acceptance_criteria": []},
        {"title": "no", "description": "b", "acceptance_criteria": []}
    ])
    .to_string();

    let (status, body) = post_json(
        app(StubDriver::replying(&reply)),
        r#"{"requirement_text": "Anything"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "parse_error");
    assert!(body.get("stories").is_none());
    assert!(body["detail"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn missing_requirement_text_is_a_client_error() {
    let driver = StubDriver::replying("[]");
    let (status, body) = post_json(app(driver.clone()), r#"{"project": "billing"}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert!(driver.prompts().is_empty());
}

#[tokio::test]
async fn blank_requirement_text_is_a_client_error() {
    let driver = StubDriver::replying("[]");
    let (status, body) = post_json(app(driver.clone()), r#"{"requirement_text": "   "}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert!(driver.prompts().is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let (status, body) = post_json(app(StubDriver::replying("[]")), "{not json").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let (status, body) = post_json(
        app(StubDriver::failing(GenerationErrorKind::Http(
            "connection refused".into(),
        ))),
        r#"{"requirement_text": "Anything"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "generation_error");
    assert!(body["detail"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn rate_limit_is_service_unavailable() {
    let (status, body) = post_json(
        app(StubDriver::failing(GenerationErrorKind::RateLimited(
            "quota exceeded".into(),
        ))),
        r#"{"requirement_text": "Anything"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "generation_error");
}

#[tokio::test]
async fn provider_outage_is_service_unavailable() {
    let (status, body) = post_json(
        app(StubDriver::failing(GenerationErrorKind::Api {
            status: 503,
            message: "The server is overloaded".into(),
        })),
        r#"{"requirement_text": "Anything"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "generation_error");
    assert!(body["detail"].as_str().unwrap().contains("overloaded"));
}

#[tokio::test]
async fn service_generates_without_http() {
    let driver = StubDriver::replying(PASSWORD_RESET_REPLY);
    let service = StoryService::new(driver.clone());
    let request = RequirementRequest::new("As a user I want to reset my password")
        .with_project("accounts");

    let stories = service.generate(&request).await.unwrap();
    let response = StoryResponse::from(stories.clone());

    assert_eq!(response.stories(), &stories);
    assert_eq!(response.into_stories()[0].title(), "Password reset");
    assert!(!driver.prompts()[0].contains("accounts"));
}
