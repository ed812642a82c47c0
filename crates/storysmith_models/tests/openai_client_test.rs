//! Exercises `OpenAiClient` against an in-process fake provider.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use storysmith_error::GenerationErrorKind;
use storysmith_models::{ClientConfig, CompletionDriver, OpenAiClient};

/// What the fake provider saw, plus what it should answer.
#[derive(Clone)]
struct FakeProvider {
    status: StatusCode,
    body: Value,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn chat_completions(
    State(provider): State<FakeProvider>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> Response {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    provider.seen.lock().unwrap().push((auth, request));
    (provider.status, Json(provider.body.clone())).into_response()
}

async fn spawn_provider(status: StatusCode, body: Value) -> (String, FakeProvider) {
    let provider = FakeProvider {
        status,
        body,
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(provider.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v1", addr), provider)
}

fn client_for(base_url: &str) -> OpenAiClient {
    OpenAiClient::new(
        ClientConfig::builder()
            .api_key("sk-test")
            .base_url(base_url)
            .model("gpt-4o-mini")
            .build()
            .unwrap(),
    )
}

fn completion(content: Value) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o-mini",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"},
            {"index": 1, "message": {"role": "assistant", "content": "second choice"}, "finish_reason": "stop"}
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
}

#[tokio::test]
async fn returns_first_choice_verbatim() {
    let reply = "  [{\"title\": \"Login\"}]\n";
    let (base_url, provider) = spawn_provider(StatusCode::OK, completion(json!(reply))).await;

    let text = client_for(&base_url).complete("the prompt").await.unwrap();
    assert_eq!(text, reply);

    let seen = provider.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (auth, request) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(request["model"], "gpt-4o-mini");
    assert_eq!(
        request["messages"],
        json!([{"role": "user", "content": "the prompt"}])
    );
    assert!(request.get("temperature").is_none());
}

#[tokio::test]
async fn unauthorized_maps_to_unauthorized() {
    let (base_url, _) = spawn_provider(
        StatusCode::UNAUTHORIZED,
        json!({"error": {"message": "Incorrect API key provided"}}),
    )
    .await;

    let err = client_for(&base_url).complete("p").await.unwrap_err();
    assert_eq!(
        err.kind,
        GenerationErrorKind::Unauthorized("Incorrect API key provided".into())
    );
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let (base_url, provider) = spawn_provider(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": {"message": "Rate limit reached"}}),
    )
    .await;

    let err = client_for(&base_url).complete("p").await.unwrap_err();
    assert!(matches!(err.kind, GenerationErrorKind::RateLimited(_)));
    assert!(err.is_transient());
    // Single attempt, no retry.
    assert_eq!(provider.seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let (base_url, _) = spawn_provider(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": {"message": "The server had an error"}}),
    )
    .await;

    let err = client_for(&base_url).complete("p").await.unwrap_err();
    assert_eq!(
        err.kind,
        GenerationErrorKind::Api {
            status: 500,
            message: "The server had an error".into()
        }
    );
}

#[tokio::test]
async fn missing_choices_is_empty_completion() {
    let (base_url, _) = spawn_provider(StatusCode::OK, json!({"choices": []})).await;

    let err = client_for(&base_url).complete("p").await.unwrap_err();
    assert_eq!(err.kind, GenerationErrorKind::EmptyCompletion);
}

#[tokio::test]
async fn null_content_is_empty_completion() {
    let (base_url, _) = spawn_provider(StatusCode::OK, completion(Value::Null)).await;

    let err = client_for(&base_url).complete("p").await.unwrap_err();
    assert_eq!(err.kind, GenerationErrorKind::EmptyCompletion);
}

#[tokio::test]
async fn non_completion_body_is_deserialization_error() {
    let (base_url, _) = spawn_provider(StatusCode::OK, json!({"unexpected": true})).await;

    let err = client_for(&base_url).complete("p").await.unwrap_err();
    assert!(matches!(err.kind, GenerationErrorKind::Deserialization(_)));
}

#[tokio::test]
async fn unreachable_provider_is_http_error() {
    // Bind then drop to get a port nobody is listening on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{}/v1", addr))
        .complete("p")
        .await
        .unwrap_err();
    assert!(matches!(err.kind, GenerationErrorKind::Http(_)));
}

#[cfg_attr(not(feature = "api"), ignore)]
#[tokio::test]
async fn live_completion_returns_text() {
    let _ = dotenvy::dotenv();
    let client = OpenAiClient::new(ClientConfig::from_env().expect("OPENAI_API_KEY required"));
    let text = client.complete("Reply with the JSON array []").await.unwrap();
    assert!(!text.is_empty());
}
