//! Handler for `POST /api/publish-video`.
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

use reelgate_db::repositories::VideoRepo;
use reelgate_publish::PublishError;

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for `POST /api/publish-video`.
#[derive(Debug, Deserialize)]
pub struct PublishVideoRequest {
    #[serde(rename = "videoId")]
    pub video_id: Option<uuid::Uuid>,
}

/// POST /api/publish-video
///
/// Publish an approved video through the configured target.
///
/// Responses:
/// - `200 {"success": true, "publishedUrl": ..., "platform": ...}`
/// - `400` when `videoId` is missing or the video is not `approved`
/// - `404` when the video is unknown
/// - `500 {"error": ..., "details": ...}` when the target call fails;
///   the record keeps status `approved` with the error annotated in
///   `metadata.publishError`
pub async fn publish_video(
    State(state): State<AppState>,
    Json(input): Json<PublishVideoRequest>,
) -> AppResult<Response> {
    let Some(video_id) = input.video_id else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Video ID is required" })),
        )
            .into_response());
    };

    let Some(video) = VideoRepo::find_by_id(&state.pool, video_id).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Video not found" })),
        )
            .into_response());
    };

    match state.dispatcher.dispatch(&state.pool, &video).await {
        Ok(published) => Ok(Json(json!({
            "success": true,
            "publishedUrl": published.published_url,
            "platform": published.published_platform,
        }))
        .into_response()),
        Err(PublishError::Precondition(_)) => Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Video must be approved before publishing" })),
        )
            .into_response()),
        Err(PublishError::Target(details)) => Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to publish video",
                "details": details,
            })),
        )
            .into_response()),
        Err(e @ PublishError::Database(_)) => Err(e.into()),
    }
}
