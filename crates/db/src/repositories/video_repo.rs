//! Repository for the `videos` table.
//!
//! `update_status` deliberately does not enforce the status transition
//! table; callers are responsible for only requesting legal transitions.

use reelgate_core::types::EntityId;
use sqlx::PgPool;

use crate::models::video::{CreateVideo, StatusPatch, Video, VideoFilter};

/// Column list for videos queries.
const VIDEO_COLUMNS: &str = "id, title, description, client_id, status, video_url, \
    thumbnail_url, duration_seconds, file_size, mime_type, approved_at, published_at, \
    published_url, published_platform, metadata, created_at, updated_at";

/// Provides CRUD operations for video records.
pub struct VideoRepo;

impl VideoRepo {
    /// Find a video by its id.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {VIDEO_COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new video with status `draft`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos
                (title, description, client_id, status, video_url, thumbnail_url,
                 duration_seconds, file_size, mime_type, metadata)
             VALUES ($1, $2, $3, 'draft', $4, $5, $6, $7, $8, $9)
             RETURNING {VIDEO_COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.client_id)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(input.duration_seconds)
            .bind(input.file_size)
            .bind(&input.mime_type)
            .bind(
                input
                    .metadata
                    .clone()
                    .unwrap_or_else(|| serde_json::json!({})),
            )
            .fetch_one(pool)
            .await
    }

    /// Replace the status and merge the patch fields into the row.
    ///
    /// Patch fields use COALESCE with the existing column value, so
    /// `approved_at`, `published_at` and the published info are written at
    /// most once and never cleared by later transitions.
    ///
    /// Returns `None` if no video with the id exists.
    pub async fn update_status(
        pool: &PgPool,
        id: EntityId,
        status: &str,
        patch: &StatusPatch,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                status = $2,
                approved_at = COALESCE(approved_at, $3),
                published_at = COALESCE(published_at, $4),
                published_url = COALESCE(published_url, $5),
                published_platform = COALESCE(published_platform, $6),
                updated_at = now()
             WHERE id = $1
             RETURNING {VIDEO_COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(status)
            .bind(patch.approved_at)
            .bind(patch.published_at)
            .bind(&patch.published_url)
            .bind(&patch.published_platform)
            .fetch_optional(pool)
            .await
    }

    /// Merge a publish failure message into `metadata.publishError` without
    /// touching the status column. The record stays in its current (approved)
    /// status so the publish can be retried.
    pub async fn record_publish_error(
        pool: &PgPool,
        id: EntityId,
        message: &str,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                metadata = metadata || jsonb_build_object('publishError', $2::text),
                updated_at = now()
             WHERE id = $1
             RETURNING {VIDEO_COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(message)
            .fetch_optional(pool)
            .await
    }

    /// List videos, newest first, with optional client/status filters.
    pub async fn list(
        pool: &PgPool,
        filter: &VideoFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {VIDEO_COLUMNS} FROM videos
             WHERE ($1::uuid IS NULL OR client_id = $1)
               AND ($2::text IS NULL OR status = $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(filter.client_id)
            .bind(&filter.status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
