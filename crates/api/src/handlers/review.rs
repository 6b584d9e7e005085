//! Handlers for the review session: the surface a client uses to inspect
//! and act on one video through a shareable link.
//!
//! These routes are unauthenticated on purpose -- the link itself scopes
//! access to a single video id -- and an unknown id is reported with the
//! same wording an unauthorized one would get, so the response does not
//! reveal whether a video exists.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use reelgate_core::error::CoreError;
use reelgate_core::status::VideoStatus;
use reelgate_core::types::EntityId;
use reelgate_db::models::feedback::{CreateFeedback, FeedbackEntry};
use reelgate_db::models::video::{StatusPatch, Video};
use reelgate_db::repositories::{FeedbackRepo, VideoRepo};
use reelgate_publish::PublishError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Error message for any video the review surface cannot serve.
const REVIEW_NOT_FOUND: &str = "Video not found or access denied";

/// Payload for `GET /api/review/{id}`: the video plus its feedback log.
#[derive(Debug, Serialize)]
pub struct ReviewSession {
    pub video: Video,
    pub feedback: Vec<FeedbackEntry>,
}

/// Request body for `POST /api/review/{id}/feedback`.
#[derive(Debug, Deserialize)]
pub struct SubmitFeedback {
    pub comment: String,
    /// Current playback position in seconds. Values of zero or below are
    /// treated as "no timestamp", so feedback left at the very start of a
    /// video is indistinguishable from general feedback. Known limitation.
    pub timestamp: Option<f64>,
}

/// Outcome of a reviewer decision.
#[derive(Debug, Serialize)]
pub struct ReviewOutcome {
    pub video: Video,
    /// Publish failure message, present when approval succeeded but the
    /// publish attempt did not. The video stays `approved` and can be
    /// retried by approving again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_error: Option<String>,
}

/// Caller-facing text for a failed publish attempt. Target failures carry
/// their own message; database failures are reported generically because
/// this surface is unauthenticated and sqlx error text stays internal.
fn publish_failure_message(error: &PublishError) -> String {
    match error {
        PublishError::Database(e) => {
            tracing::error!(error = %e, "Publish failed with a database error");
            "Failed to publish video".to_string()
        }
        other => other.to_string(),
    }
}

/// Load the video for a review route, mapping a missing row to the
/// existence-hiding review error.
async fn load_video(state: &AppState, video_id: EntityId) -> AppResult<Video> {
    VideoRepo::find_by_id(&state.pool, video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(REVIEW_NOT_FOUND.to_string()))
}

/// GET /api/review/{id}
///
/// Fetch the video and its feedback log in one payload.
pub async fn load_session(
    State(state): State<AppState>,
    Path(video_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let video = load_video(&state, video_id).await?;
    let feedback = FeedbackRepo::list_for_video(&state.pool, video_id).await?;

    Ok(Json(DataResponse {
        data: ReviewSession { video, feedback },
    }))
}

/// POST /api/review/{id}/feedback
///
/// Append a timestamped comment to the video's feedback log.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Path(video_id): Path<EntityId>,
    Json(input): Json<SubmitFeedback>,
) -> AppResult<impl IntoResponse> {
    if input.comment.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Comment must not be empty".to_string(),
        )));
    }

    let video = load_video(&state, video_id).await?;

    let create = CreateFeedback {
        video_id: video.id,
        timestamp: input.timestamp.filter(|t| *t > 0.0),
        comment: input.comment,
    };
    let entry = FeedbackRepo::create(&state.pool, &create).await?;

    tracing::info!(video_id = %video_id, feedback_id = %entry.id, "Feedback submitted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// POST /api/review/{id}/approve
///
/// Approve the video and synchronously trigger publishing. The response
/// reports whichever status the dispatcher left behind: `published` on
/// success, or `approved` plus a `publish_error` when the target failed.
pub async fn approve(
    State(state): State<AppState>,
    Path(video_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let video = load_video(&state, video_id).await?;

    let status = VideoStatus::parse(&video.status).map_err(AppError::Core)?;
    if !status.accepts_approval() {
        return Err(AppError::Core(CoreError::Precondition(format!(
            "Video in status '{status}' cannot be approved"
        ))));
    }

    // COALESCE keeps the original approval time on a publish retry.
    let patch = StatusPatch {
        approved_at: Some(Utc::now()),
        ..StatusPatch::default()
    };
    let approved =
        VideoRepo::update_status(&state.pool, video_id, VideoStatus::Approved.as_str(), &patch)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

    tracing::info!(video_id = %video_id, "Video approved");

    let publish_error = match state.dispatcher.dispatch(&state.pool, &approved).await {
        Ok(_) => None,
        Err(e) => Some(publish_failure_message(&e)),
    };

    let video = VideoRepo::find_by_id(&state.pool, video_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    Ok(Json(DataResponse {
        data: ReviewOutcome {
            video,
            publish_error,
        },
    }))
}

/// POST /api/review/{id}/reject
///
/// Reject the video. No publishing and no notification are triggered for
/// rejection.
pub async fn reject(
    State(state): State<AppState>,
    Path(video_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let video = load_video(&state, video_id).await?;

    let status = VideoStatus::parse(&video.status).map_err(AppError::Core)?;
    if !status.accepts_rejection() {
        return Err(AppError::Core(CoreError::Precondition(format!(
            "Video in status '{status}' cannot be rejected"
        ))));
    }

    let rejected = VideoRepo::update_status(
        &state.pool,
        video_id,
        VideoStatus::Rejected.as_str(),
        &StatusPatch::default(),
    )
    .await?
    .ok_or(sqlx::Error::RowNotFound)?;

    tracing::info!(video_id = %video_id, "Video rejected");

    Ok(Json(DataResponse {
        data: ReviewOutcome {
            video: rejected,
            publish_error: None,
        },
    }))
}
