/// LLM Client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the upstream provider directly.
/// All LLM interactions MUST go through this module.
///
/// Model: google/gemini-flash-1.5 via OpenRouter (hardcoded — do not make configurable)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// The model used for every verse lookup.
pub const MODEL: &str = "google/gemini-flash-1.5";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {message} (status {status})")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No content received from API")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Success-status body. OpenRouter may still report a failure here via `error`.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub error: Option<ApiErrorBody>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    /// Numeric on OpenRouter, but tolerated as any JSON value.
    pub code: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Extracts the content of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

/// Anything that can turn a prompt into raw completion text.
/// Handlers depend on this trait so tests can swap the upstream out.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Wraps the OpenRouter chat-completions API.
/// One request per call: no retry and no backoff.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Makes a single call to the chat-completions endpoint and returns the
    /// content of the first choice.
    pub async fn call(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatCompletionRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!("Sending chat completion request to {}", self.endpoint());

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Upstream responded with status {status}");

        interpret_response(status, &body)
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.call(prompt).await
    }
}

/// Classifies an upstream reply into content or one of the `LlmError` cases.
fn interpret_response(status: StatusCode, body: &str) -> Result<String, LlmError> {
    if !status.is_success() {
        warn!("LLM API returned {}: {}", status, body);
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|e| e.error.message)
            .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(LlmError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let parsed: ChatCompletionResponse = serde_json::from_str(body)?;

    if let Some(error) = parsed.error {
        let code = error
            .code
            .as_ref()
            .and_then(|c| c.as_u64())
            .and_then(|c| u16::try_from(c).ok())
            .unwrap_or(status.as_u16());
        return Err(LlmError::Api {
            status: code,
            message: error.message.unwrap_or_else(|| "Unknown error".to_string()),
        });
    }

    if let Some(usage) = &parsed.usage {
        debug!(
            "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
            usage.prompt_tokens, usage.completion_tokens
        );
    }

    match parsed.text() {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(LlmError::EmptyContent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{header, HeaderMap},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};

    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn fixed_upstream(status: u16, body: &'static str) -> String {
        let status = axum::http::StatusCode::from_u16(status).unwrap();
        let router = Router::new().route(
            "/chat/completions",
            post(move || async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }),
        );
        spawn_upstream(router).await
    }

    fn client(base_url: String) -> LlmClient {
        LlmClient::new("sk-test".to_string(), base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_interpret_success_returns_first_choice() {
        let body = r#"{"choices":[{"message":{"content":"1. First"}},{"message":{"content":"other"}}]}"#;
        assert_eq!(interpret_response(StatusCode::OK, body).unwrap(), "1. First");
    }

    #[test]
    fn test_interpret_http_error_uses_upstream_message() {
        let body = r#"{"error":{"message":"invalid key"}}"#;
        match interpret_response(StatusCode::UNAUTHORIZED, body) {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_interpret_http_error_non_json_body_falls_back_to_raw_text() {
        match interpret_response(StatusCode::BAD_GATEWAY, "upstream down") {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_interpret_http_error_empty_body_is_unknown_error() {
        match interpret_response(StatusCode::INTERNAL_SERVER_ERROR, "") {
            Err(LlmError::Api { message, .. }) => assert_eq!(message, "Unknown error"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_interpret_error_payload_on_success_status() {
        let body = r#"{"error":{"message":"quota exceeded","code":402}}"#;
        match interpret_response(StatusCode::OK, body) {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 402);
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_interpret_empty_choices_is_empty_content() {
        let result = interpret_response(StatusCode::OK, r#"{"choices":[]}"#);
        assert!(matches!(result, Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_interpret_missing_choices_and_blank_content_are_empty_content() {
        assert!(matches!(
            interpret_response(StatusCode::OK, "{}"),
            Err(LlmError::EmptyContent)
        ));
        assert!(matches!(
            interpret_response(StatusCode::OK, r#"{"choices":[{"message":{"content":""}}]}"#),
            Err(LlmError::EmptyContent)
        ));
        assert!(matches!(
            interpret_response(StatusCode::OK, r#"{"choices":[{"message":null}]}"#),
            Err(LlmError::EmptyContent)
        ));
    }

    #[test]
    fn test_interpret_garbage_success_body_is_parse_error() {
        assert!(matches!(
            interpret_response(StatusCode::OK, "<html>"),
            Err(LlmError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_call_sends_model_prompt_and_bearer_token() {
        let router = Router::new().route(
            "/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                let echo = format!(
                    "{}|{}|{}|{}",
                    auth,
                    body["model"].as_str().unwrap_or_default(),
                    body["messages"][0]["role"].as_str().unwrap_or_default(),
                    body["messages"][0]["content"].as_str().unwrap_or_default(),
                );
                Json(json!({"choices": [{"message": {"content": echo}}]}))
            }),
        );
        let base_url = spawn_upstream(router).await;

        let content = client(base_url).call("help me").await.unwrap();
        assert_eq!(
            content,
            "Bearer sk-test|google/gemini-flash-1.5|user|help me"
        );
    }

    #[tokio::test]
    async fn test_call_surfaces_401_with_message() {
        let base_url = fixed_upstream(401, r#"{"error":{"message":"invalid key"}}"#).await;

        let err = client(base_url).call("help me").await.unwrap_err();
        let text = err.to_string();
        assert!(text.contains("invalid key"));
        assert!(matches!(err, LlmError::Api { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_call_empty_choices_is_empty_content() {
        let base_url = fixed_upstream(200, r#"{"choices":[]}"#).await;
        let err = client(base_url).call("help me").await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_call_unreachable_upstream_is_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{addr}")).call("help me").await.unwrap_err();
        assert!(matches!(err, LlmError::Http(_)));
    }

    #[tokio::test]
    async fn test_call_hung_upstream_times_out_as_http_error() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"choices": [{"message": {"content": "too late"}}]}))
            }),
        );
        let base_url = spawn_upstream(router).await;
        let client =
            LlmClient::new("sk-test".to_string(), base_url, Duration::from_millis(100)).unwrap();

        match client.call("help me").await {
            Err(LlmError::Http(e)) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
