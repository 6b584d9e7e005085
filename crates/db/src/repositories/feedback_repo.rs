//! Repository for the `video_feedback` table (append-only).

use reelgate_core::types::EntityId;
use sqlx::PgPool;

use crate::models::feedback::{CreateFeedback, FeedbackEntry};

/// Column list for video_feedback queries.
const FEEDBACK_COLUMNS: &str = "id, video_id, \"timestamp\", comment, created_at";

/// Provides append and list operations for feedback entries.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Append a feedback entry, returning the created row with its
    /// server-assigned id and creation time.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFeedback,
    ) -> Result<FeedbackEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO video_feedback (video_id, \"timestamp\", comment)
             VALUES ($1, $2, $3)
             RETURNING {FEEDBACK_COLUMNS}"
        );
        sqlx::query_as::<_, FeedbackEntry>(&query)
            .bind(input.video_id)
            .bind(input.timestamp)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// List all feedback for a video, oldest first. The id tiebreak keeps
    /// the order stable when two entries share a creation timestamp.
    pub async fn list_for_video(
        pool: &PgPool,
        video_id: EntityId,
    ) -> Result<Vec<FeedbackEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {FEEDBACK_COLUMNS} FROM video_feedback
             WHERE video_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, FeedbackEntry>(&query)
            .bind(video_id)
            .fetch_all(pool)
            .await
    }
}
