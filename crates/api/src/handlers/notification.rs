//! Handler for `POST /api/send-notification`.
//!
//! This endpoint's request and response shapes are a preserved wire
//! contract (camelCase fields, flat bodies without the `data` envelope);
//! keep them stable.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use reelgate_core::types::EntityId;
use reelgate_notify::{NotificationKind, NotifyError};

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /api/send-notification`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub video_id: Option<EntityId>,
    pub video_title: Option<String>,
    pub published_url: Option<String>,
    pub platform: Option<String>,
    pub client_id: Option<EntityId>,
}

/// POST /api/send-notification
///
/// Render and send a status-change email to the owning client.
///
/// Responses:
/// - `200 {"success": true, "emailId": ...}`
/// - `400` for missing fields or an unknown `type`
/// - `404` when no email address resolves for the client
/// - `500` when delivery fails
pub async fn send_notification(
    State(state): State<AppState>,
    Json(input): Json<SendNotificationRequest>,
) -> AppResult<Response> {
    let (Some(kind), Some(video_id), Some(client_id)) =
        (&input.kind, input.video_id, input.client_id)
    else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing required fields" })),
        )
            .into_response());
    };

    let Ok(kind) = NotificationKind::parse(kind) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Unknown notification type" })),
        )
            .into_response());
    };

    let video_title = input.video_title.as_deref().unwrap_or_default();

    let result = state
        .notifier
        .notify(
            &state.pool,
            kind,
            client_id,
            video_title,
            input.published_url.as_deref(),
            input.platform.as_deref(),
        )
        .await;

    match result {
        Ok(email_id) => {
            tracing::info!(video_id = %video_id, kind = kind.as_str(), "Notification sent");
            Ok(Json(json!({ "success": true, "emailId": email_id })).into_response())
        }
        Err(NotifyError::RecipientNotFound { client_id }) => {
            tracing::warn!(client_id = %client_id, "Client email not found");
            Ok((
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Client email not found" })),
            )
                .into_response())
        }
        Err(e @ NotifyError::Database(_)) => Err(e.into()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to send email");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to send email" })),
            )
                .into_response())
        }
    }
}
