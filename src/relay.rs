//! Stateless HTTP proxy that forwards chat requests to an upstream
//! vision/chat completion API and translates failures into client-facing
//! JSON error envelopes. Independent of the game; shares nothing with it.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Default upstream chat completions endpoint.
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.x.ai/v1/chat/completions";

/// Fixed model identifier sent with every forwarded request.
pub const DEFAULT_MODEL: &str = "grok-2-vision-1212";

/// Upstream request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Request body size limit (50 MB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3001;

/// Relay settings, normally read from the environment by the binary.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub upstream_url: String,
    pub api_key: String,
    pub model: String,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
}

impl RelayConfig {
    /// Creates a config with the stock upstream settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Clone)]
struct RelayState {
    client: reqwest::Client,
    config: Arc<RelayConfig>,
}

/// Incoming chat request; only `messages` is read, everything else is fixed
/// by the relay.
#[derive(Debug, Deserialize)]
struct ChatRequest {
    messages: Value,
}

/// Client-facing error envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// Relay failure kinds; all surface as JSON envelopes, none are retried.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("upstream request timed out")]
    Timeout,
    #[error("request body exceeds the configured limit")]
    PayloadTooLarge,
    #[error("malformed request: {0}")]
    BadRequest(String),
    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("upstream transport error: {0}")]
    Transport(reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            Self::Timeout => (
                StatusCode::GATEWAY_TIMEOUT,
                ErrorBody {
                    error: "请求超时".to_string(),
                    message: "服务器响应时间过长，请稍后重试".to_string(),
                },
            ),
            Self::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorBody {
                    error: "请求数据过大".to_string(),
                    message: "请减小图片大小或数量后重试".to_string(),
                },
            ),
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "请求格式错误".to_string(),
                    message,
                },
            ),
            Self::Upstream { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                ErrorBody {
                    error: "与AI服务通信失败".to_string(),
                    message,
                },
            ),
            Self::Transport(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "与AI服务通信失败".to_string(),
                    message: error.to_string(),
                },
            ),
        };

        (status, Json(envelope)).into_response()
    }
}

/// Builds the relay router with CORS, request tracing, and body limits.
pub fn router(config: RelayConfig) -> Router {
    let max_body_bytes = config.max_body_bytes;
    let state = RelayState {
        client: reqwest::Client::new(),
        config: Arc::new(config),
    };

    Router::new()
        .route("/api/chat", post(chat))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Forwards one chat request upstream and returns the upstream JSON body
/// verbatim on success.
async fn chat(
    State(state): State<RelayState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, RelayError> {
    let Json(request) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            RelayError::PayloadTooLarge
        } else {
            RelayError::BadRequest(rejection.body_text())
        }
    })?;

    let config = &state.config;
    let outbound = json!({
        "messages": request.messages,
        "model": config.model,
        "stream": false,
        "temperature": 0,
    });

    let response = state
        .client
        .post(&config.upstream_url)
        .bearer_auth(&config.api_key)
        .json(&outbound)
        .timeout(config.request_timeout)
        .send()
        .await
        .map_err(|error| {
            warn!(%error, "upstream request failed");
            if error.is_timeout() {
                RelayError::Timeout
            } else {
                RelayError::Transport(error)
            }
        })?;

    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(RelayError::Transport)?;

    if (200..300).contains(&status) {
        return Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response());
    }

    if status == StatusCode::PAYLOAD_TOO_LARGE.as_u16() {
        return Err(RelayError::PayloadTooLarge);
    }

    warn!(status, "upstream returned an error response");
    Err(RelayError::Upstream {
        status,
        message: upstream_error_message(&body),
    })
}

/// Extracts the upstream `error` field when present, falling back to the
/// raw body text.
fn upstream_error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => match value.get("error") {
            Some(Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => String::from_utf8_lossy(body).into_owned(),
        },
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}
