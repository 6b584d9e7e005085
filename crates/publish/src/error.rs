/// Error type for publish dispatch failures.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The video is not in `approved` status; nothing was mutated.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The publish target call failed. The failure message has been merged
    /// into the video's `metadata.publishError` and the status retained as
    /// `approved` so the publish can be retried.
    #[error("Publish target failed: {0}")]
    Target(String),

    /// A persistence call failed mid-dispatch.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
