//! Video entity model and DTOs.

use reelgate_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `videos` table.
///
/// `approved_at` and `published_at` are set at most once and never cleared;
/// `published_url`/`published_platform` are set only by a successful publish.
/// `metadata` carries non-fatal annotations such as the last publish error
/// under the `publishError` key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub client_id: EntityId,
    pub status: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_seconds: Option<f64>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub approved_at: Option<Timestamp>,
    pub published_at: Option<Timestamp>,
    pub published_url: Option<String>,
    pub published_platform: Option<String>,
    pub metadata: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a video. Status is always `draft` on insert.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVideo {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub client_id: EntityId,
    #[validate(length(min = 1, message = "video_url must not be empty"))]
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    #[validate(range(min = 0.0, message = "duration_seconds must be non-negative"))]
    pub duration_seconds: Option<f64>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Optional fields merged into a row alongside a status change.
///
/// Every field uses COALESCE on update, so a value that is already set in
/// the row is never overwritten and never cleared.
#[derive(Debug, Default)]
pub struct StatusPatch {
    pub approved_at: Option<Timestamp>,
    pub published_at: Option<Timestamp>,
    pub published_url: Option<String>,
    pub published_platform: Option<String>,
}

/// Filter for listing videos.
#[derive(Debug, Default)]
pub struct VideoFilter {
    pub client_id: Option<EntityId>,
    pub status: Option<String>,
}
