//! API proxy handlers for communicating with the backend
//!
//! The browser only ever talks to this server; these handlers forward to
//! the configured backend base URL so the pages stay same-origin. Failures
//! propagate as real error statuses with a `detail` body, matching the
//! backend's own error shape, so the client treats proxy and backend
//! failures uniformly.

use axum::{extract::State, http::StatusCode, response::Json};
use feedback_core::types::NewSubmission;
use feedback_core::Error;
use std::sync::Arc;
use tracing::{error, warn};
use validator::Validate;

use crate::state::AppState;

/// Map a client error onto a proxy response with the backend's error shape
fn proxy_error(e: &Error) -> (StatusCode, Json<serde_json::Value>) {
    let status = match e {
        Error::Http { status } | Error::Api { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        _ => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(serde_json::json!({
            "detail": { "message": e.user_message() }
        })),
    )
}

/// API endpoint for the submission list - proxies to the backend
pub async fn api_submissions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    match state.api_client.list_submissions().await {
        Ok(list) => Ok(Json(serde_json::json!(list))),
        Err(e) => {
            error!("Failed to fetch submissions from API: {}", e);
            Err(proxy_error(&e))
        }
    }
}

/// API endpoint for the analytics summary - proxies to the backend
pub async fn api_analytics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    match state.api_client.fetch_analytics().await {
        Ok(summary) => Ok(Json(serde_json::json!(summary))),
        Err(e) => {
            error!("Failed to fetch analytics from API: {}", e);
            Err(proxy_error(&e))
        }
    }
}

/// API endpoint for creating a submission - proxies to the backend
///
/// The body is validated before forwarding; backend rejections pass through
/// with their status code and `detail` body intact so the form can show the
/// server-provided message.
pub async fn api_create_submission(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewSubmission>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    if let Err(validation_errors) = body.validate() {
        warn!("Rejected invalid submission body: {:?}", validation_errors);
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({
                "detail": {
                    "code": "VALIDATION_ERROR",
                    "message": "Rating must be 1-5 and review text 1-2000 characters"
                }
            })),
        ));
    }

    match state.api_client.create_submission(&body).await {
        Ok(submission) => Ok(Json(serde_json::json!(submission))),
        Err(e) => {
            warn!("Failed to create submission: {}", e);
            Err(proxy_error(&e))
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
