//! Per-request timeout.

use std::time::Duration;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiErrorResponse;
use crate::state::AppState;

/// Fails a request with 408 if the handler runs past `server.request_timeout_seconds`.
pub async fn request_timeout(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let limit = Duration::from_secs(state.config.server.request_timeout_seconds);
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(timeout_secs = limit.as_secs(), "Request timed out");
            let body = ApiErrorResponse {
                error: "REQUEST_TIMEOUT".to_string(),
                message: format!("Request did not complete within {}s", limit.as_secs()),
            };
            (StatusCode::REQUEST_TIMEOUT, Json(body)).into_response()
        }
    }
}
