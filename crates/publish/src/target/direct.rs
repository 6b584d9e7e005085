use async_trait::async_trait;

use reelgate_db::models::video::Video;

use super::{PublishTarget, PublishedAsset, TargetError};

/// Direct hosting: the existing video URL is reused verbatim as the
/// published URL. No external call is made.
pub struct DirectTarget;

#[async_trait]
impl PublishTarget for DirectTarget {
    fn platform(&self) -> &'static str {
        "direct"
    }

    async fn publish(&self, video: &Video) -> Result<PublishedAsset, TargetError> {
        Ok(PublishedAsset {
            url: video.video_url.clone(),
        })
    }
}
