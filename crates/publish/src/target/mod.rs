//! Publish target seam.
//!
//! A [`PublishTarget`] takes an approved video and produces the externally
//! visible URL it was published under. The bundled implementations are
//! placeholders for the real platform integrations: they produce
//! deterministic URLs without network calls, which is all the workflow
//! needs until a real integration lands.

mod direct;
mod stream;
mod youtube;

pub use direct::DirectTarget;
pub use stream::StreamTarget;
pub use youtube::YouTubeTarget;

use async_trait::async_trait;

use reelgate_db::models::video::Video;

/// Error raised by a publish target call (network/API failure).
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TargetError {
    pub message: String,
}

impl TargetError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The result of a successful publish call.
#[derive(Debug, Clone)]
pub struct PublishedAsset {
    /// Externally visible URL of the published video.
    pub url: String,
}

/// An external platform that can receive a publish request.
#[async_trait]
pub trait PublishTarget: Send + Sync {
    /// The platform tag recorded on the video row (e.g. `"direct"`).
    fn platform(&self) -> &'static str;

    /// Publish the video, returning the published asset on success.
    async fn publish(&self, video: &Video) -> Result<PublishedAsset, TargetError>;
}

#[cfg(test)]
pub(crate) fn test_video(video_url: &str) -> Video {
    let now = chrono::Utc::now();
    Video {
        id: uuid::Uuid::new_v4(),
        title: "Test video".to_string(),
        description: None,
        client_id: uuid::Uuid::new_v4(),
        status: "approved".to_string(),
        video_url: video_url.to_string(),
        thumbnail_url: None,
        duration_seconds: None,
        file_size: None,
        mime_type: None,
        approved_at: Some(now),
        published_at: None,
        published_url: None,
        published_platform: None,
        metadata: serde_json::json!({}),
        created_at: now,
        updated_at: now,
    }
}
