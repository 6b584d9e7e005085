//! Feedback entity model and DTOs.

use reelgate_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `video_feedback` table.
///
/// Entries are append-only: there is no update or delete surface, and
/// insertion order equals chronological order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedbackEntry {
    pub id: EntityId,
    pub video_id: EntityId,
    /// Playback position in seconds. `None` means general feedback not
    /// tied to a moment in the video.
    pub timestamp: Option<f64>,
    pub comment: String,
    pub created_at: Timestamp,
}

/// DTO for appending a feedback entry.
#[derive(Debug, Deserialize)]
pub struct CreateFeedback {
    pub video_id: EntityId,
    pub timestamp: Option<f64>,
    pub comment: String,
}
