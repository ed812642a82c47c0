use crate::{
    ChatCompletionRequest, ChatCompletionResponse, ClientConfig, CompletionDriver, Message,
    response::ApiErrorBody,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use storysmith_error::{GenerationError, GenerationErrorKind, GenerationResult};
use tracing::{debug, instrument};

/// Client for OpenAI-compatible chat completion APIs
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a new client
    #[instrument(skip(config), fields(base_url = %config.base_url(), model = %config.model()))]
    pub fn new(config: ClientConfig) -> Self {
        debug!("Creating completion client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a chat completion request
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> GenerationResult<ChatCompletionResponse> {
        let url = self.config.completions_url();
        debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                GenerationError::new(GenerationErrorKind::Http(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, "Provider returned error");
            return Err(status_error(status, &body));
        }

        let result = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            GenerationError::new(GenerationErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!("Chat completion successful");
        Ok(result)
    }

    fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        let mut request =
            ChatCompletionRequest::new(self.config.model().clone(), vec![Message::user(prompt)]);
        request.temperature = *self.config.temperature();
        request.max_tokens = *self.config.max_tokens();
        request
    }
}

/// Map a non-success status to an error kind, preferring the provider's message.
fn status_error(status: StatusCode, body: &str) -> GenerationError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("no response body").to_string()
            } else {
                body.to_string()
            }
        });

    let kind = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GenerationErrorKind::Unauthorized(message)
        }
        StatusCode::TOO_MANY_REQUESTS => GenerationErrorKind::RateLimited(message),
        _ => GenerationErrorKind::Api {
            status: status.as_u16(),
            message,
        },
    };
    GenerationError::new(kind)
}

#[async_trait]
impl CompletionDriver for OpenAiClient {
    #[instrument(skip(self, prompt), fields(provider = "openai", model = %self.config.model(), prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> GenerationResult<String> {
        debug!(prompt, "Outbound prompt");

        let response = self.chat_completion(&self.build_request(prompt)).await?;
        let content = response
            .first_content()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyCompletion))?
            .to_string();

        debug!(reply = %content, "Raw model reply");
        Ok(content)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
