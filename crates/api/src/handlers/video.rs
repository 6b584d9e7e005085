//! Handlers for the `/videos` resource. Admin only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use reelgate_core::error::CoreError;
use reelgate_core::status::VideoStatus;
use reelgate_core::types::EntityId;
use reelgate_db::models::video::{CreateVideo, VideoFilter};
use reelgate_db::repositories::{ClientRepo, VideoRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /api/videos`.
#[derive(Debug, Deserialize)]
pub struct VideoQuery {
    pub client_id: Option<EntityId>,
    pub status: Option<String>,
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

/// Maximum page size for video listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for video listing.
const DEFAULT_LIMIT: i64 = 50;

/// GET /api/videos
///
/// List videos, newest first, with optional client/status filters.
pub async fn list_videos(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<VideoQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    // A status filter outside the lifecycle table is a caller mistake,
    // not an empty result set.
    if let Some(status) = &params.status {
        VideoStatus::parse(status).map_err(AppError::Core)?;
    }

    let filter = VideoFilter {
        client_id: params.client_id,
        status: params.status,
    };
    let videos = VideoRepo::list(&state.pool, &filter, limit, offset).await?;

    Ok(Json(DataResponse { data: videos }))
}

/// POST /api/videos
///
/// Create a video record in `draft` status for the given client.
pub async fn create_video(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateVideo>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    ClientRepo::find_by_id(&state.pool, input.client_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id: input.client_id,
        }))?;

    let video = VideoRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = %auth.user_id,
        video_id = %video.id,
        client_id = %video.client_id,
        "Video created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// GET /api/videos/{id}
pub async fn get_video(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let video = VideoRepo::find_by_id(&state.pool, video_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: video_id,
        }))?;

    Ok(Json(DataResponse { data: video }))
}

/// POST /api/videos/{id}/submit
///
/// Move a draft video into `review`, making it actionable by the reviewer.
pub async fn submit_for_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let video = VideoRepo::find_by_id(&state.pool, video_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id: video_id,
        }))?;

    let status = VideoStatus::parse(&video.status).map_err(AppError::Core)?;
    if !status.can_transition(VideoStatus::Review) {
        return Err(AppError::Core(CoreError::Precondition(format!(
            "Video in status '{status}' cannot be submitted for review"
        ))));
    }

    let updated = VideoRepo::update_status(
        &state.pool,
        video_id,
        VideoStatus::Review.as_str(),
        &Default::default(),
    )
    .await?
    .ok_or(sqlx::Error::RowNotFound)?;

    tracing::info!(user_id = %auth.user_id, video_id = %video_id, "Video submitted for review");

    Ok(Json(DataResponse { data: updated }))
}
