use async_trait::async_trait;

use reelgate_db::models::video::Video;

use super::{PublishTarget, PublishedAsset, TargetError};

/// Managed stream hosting target (Cloudflare Stream style).
///
/// Placeholder implementation: a real integration would push the asset to
/// the stream account and return the playback URL. Until then the existing
/// video URL is echoed back.
pub struct StreamTarget {
    #[allow(dead_code)]
    account_id: String,
    #[allow(dead_code)]
    api_token: String,
}

impl StreamTarget {
    pub fn new(account_id: String, api_token: String) -> Self {
        Self {
            account_id,
            api_token,
        }
    }
}

#[async_trait]
impl PublishTarget for StreamTarget {
    fn platform(&self) -> &'static str {
        "stream"
    }

    async fn publish(&self, video: &Video) -> Result<PublishedAsset, TargetError> {
        Ok(PublishedAsset {
            url: video.video_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::test_video;

    #[tokio::test]
    async fn test_stream_echoes_video_url() {
        let video = test_video("https://cdn.example.com/v.mp4");
        let target = StreamTarget::new("acct".into(), "token".into());
        let asset = target.publish(&video).await.unwrap();
        assert_eq!(asset.url, video.video_url);
        assert_eq!(target.platform(), "stream");
    }
}
