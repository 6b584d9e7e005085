//! Video lifecycle status model and transition rules.
//!
//! A video moves through `draft -> review -> approved -> published`, with
//! `rejected` as the alternative review outcome. `published` and `rejected`
//! are terminal: no automated transition leaves them. The transition table
//! is enforced by callers (review handlers, publish dispatcher), never by
//! the repository layer, which stores whatever status it is handed.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a video record, stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    /// Freshly created, not yet handed to a reviewer.
    Draft,
    /// Awaiting a reviewer decision.
    Review,
    /// Approved by the reviewer; eligible for publishing (and for publish
    /// retries after a failed attempt).
    Approved,
    /// Successfully published to a target platform. Terminal.
    Published,
    /// Rejected by the reviewer. Terminal.
    Rejected,
}

/// All valid status values, in lifecycle order.
pub const VALID_STATUSES: &[&str] = &["draft", "review", "approved", "published", "rejected"];

impl VideoStatus {
    /// The lowercase string form stored in the `videos.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            VideoStatus::Draft => "draft",
            VideoStatus::Review => "review",
            VideoStatus::Approved => "approved",
            VideoStatus::Published => "published",
            VideoStatus::Rejected => "rejected",
        }
    }

    /// Parse a stored status string, rejecting anything outside the table.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "draft" => Ok(VideoStatus::Draft),
            "review" => Ok(VideoStatus::Review),
            "approved" => Ok(VideoStatus::Approved),
            "published" => Ok(VideoStatus::Published),
            "rejected" => Ok(VideoStatus::Rejected),
            other => Err(CoreError::Validation(format!(
                "Invalid video status '{other}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }

    /// Whether this status admits no further automated transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, VideoStatus::Published | VideoStatus::Rejected)
    }

    /// Whether `self -> to` is a legal transition.
    ///
    /// `Approved -> Approved` is legal: a failed publish attempt retains the
    /// approved status so the record stays retryable.
    pub fn can_transition(self, to: VideoStatus) -> bool {
        use VideoStatus::*;
        matches!(
            (self, to),
            (Draft, Review)
                | (Review, Approved)
                | (Review, Rejected)
                | (Approved, Published)
                | (Approved, Approved)
        )
    }

    /// Whether a reviewer may approve a video in this status.
    ///
    /// Approval is permitted from `draft` and `review`, and re-permitted
    /// from `approved` so that a failed publish can be retried by approving
    /// again. Terminal statuses refuse the action.
    pub fn accepts_approval(self) -> bool {
        matches!(
            self,
            VideoStatus::Draft | VideoStatus::Review | VideoStatus::Approved
        )
    }

    /// Whether a reviewer may reject a video in this status.
    ///
    /// Rejection is a review-stage decision only; an approved video is
    /// already in the publish pipeline and cannot be rejected from here.
    pub fn accepts_rejection(self) -> bool {
        matches!(self, VideoStatus::Draft | VideoStatus::Review)
    }
}

impl std::fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
