//! # Elevated HTTP API Routes
//!
//! File: cli/src/commands/srv/routes.rs
//!
//! ## Overview
//!
//! JSON endpoints behind `elevated srv`:
//!
//! | Method | Path                   | Body                        | Response                   |
//! |--------|------------------------|-----------------------------|----------------------------|
//! | POST   | `/api/chat`            | `{message}`                 | `{answer, topic}`          |
//! | GET    | `/api/topics`          |                             | `[{topic, triggers}]`      |
//! | POST   | `/api/notify`          | `{email, name, type}`       | `{success, message, subject}` |
//! | POST   | `/api/tools/copy`      | `{kind, track_name, artist_name, genre}` | `{kind, content}` |
//! | POST   | `/api/tools/cover-art` | `{prompt, style}`           | `{url, prompt, style}`     |
//! | GET    | `/health`              |                             | `{status, version}`        |
//!
//! Failures are answered with `{"error": "<message>"}`: 400 when the caller's
//! payload was rejected (including bodies that are not valid JSON or do not
//! fit the expected shape), 500 otherwise.
//!
use crate::assistant::{matcher, Topic};
use crate::core::config::ToolkitConfig;
use crate::core::error::AppError;
use crate::notify::{EmailAck, EmailRequest, Notifier};
use crate::toolkit::{self, CopyRequest, CoverArt, CoverArtRequest, GeneratedCopy};
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error};

/// Read-only state shared by every handler.
#[derive(Debug)]
pub struct AppState {
    pub notifier: Notifier,
    pub toolkit: ToolkitConfig,
}

/// Handler error: wraps any `anyhow::Error` and picks the status from the
/// `AppError` inside it, if there is one.
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.downcast_ref::<AppError>() {
            Some(app_err) if app_err.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        } else {
            debug!("Rejected request: {}", self.0);
        }

        let body = Json(json!({
            "error": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}

/// `Json` extractor whose rejections are reported as `ApiError` (400 with a
/// JSON body) instead of axum's plain-text responses.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::InvalidRequest(rejection.body_text()).into()),
        }
    }
}

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub answer: &'static str,
    pub topic: Option<Topic>,
}

/// Builds the API router. Layers and the static fallback are added by the caller.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/topics", get(topics))
        .route("/api/notify", post(notify))
        .route("/api/tools/copy", post(write_copy))
        .route("/api/tools/cover-art", post(cover_art))
        .route("/health", get(health))
        .with_state(state)
}

async fn chat(ApiJson(request): ApiJson<ChatRequest>) -> ApiResult<ChatReply> {
    let topic = matcher::classify(&request.message);
    Ok(Json(ChatReply {
        answer: matcher::find_answer(&request.message),
        topic,
    }))
}

async fn topics() -> Json<&'static [matcher::Rule]> {
    Json(matcher::rules())
}

async fn notify(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<EmailRequest>,
) -> ApiResult<EmailAck> {
    let (ack, _rendered) = state.notifier.handle(&request)?;
    Ok(Json(ack))
}

async fn write_copy(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CopyRequest>,
) -> ApiResult<GeneratedCopy> {
    let copy = toolkit::write_copy(&state.toolkit, &request).await?;
    Ok(Json(copy))
}

async fn cover_art(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CoverArtRequest>,
) -> ApiResult<CoverArt> {
    let art = toolkit::create_cover_art(&state.toolkit, &request).await?;
    Ok(Json(art))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
