use async_trait::async_trait;

use reelgate_db::models::video::Video;

use super::{PublishTarget, PublishedAsset, TargetError};

/// YouTube upload target.
///
/// Placeholder implementation: a real integration would run the OAuth flow
/// against the configured client credentials and call the YouTube upload
/// API. Until then the target returns a deterministic mock watch URL so the
/// rest of the workflow is exercised end to end.
pub struct YouTubeTarget {
    #[allow(dead_code)]
    client_id: String,
    #[allow(dead_code)]
    client_secret: String,
}

impl YouTubeTarget {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client_id,
            client_secret,
        }
    }
}

#[async_trait]
impl PublishTarget for YouTubeTarget {
    fn platform(&self) -> &'static str {
        "youtube"
    }

    async fn publish(&self, video: &Video) -> Result<PublishedAsset, TargetError> {
        Ok(PublishedAsset {
            url: format!("https://www.youtube.com/watch?v=mock-{}", video.id),
        })
    }
}
