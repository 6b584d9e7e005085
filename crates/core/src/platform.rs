//! Publish target platform tags.
//!
//! The platform is resolved once at startup from configuration and injected
//! into the publish dispatcher; it is never re-read per call.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Platform a video is published to. Stored as lowercase text in
/// `videos.published_platform` on successful publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishPlatform {
    /// YouTube upload via the configured OAuth client.
    Youtube,
    /// Managed stream hosting (Cloudflare Stream style).
    Stream,
    /// No external target: the existing video URL is served as-is.
    Direct,
}

impl PublishPlatform {
    pub fn as_str(self) -> &'static str {
        match self {
            PublishPlatform::Youtube => "youtube",
            PublishPlatform::Stream => "stream",
            PublishPlatform::Direct => "direct",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "youtube" => Ok(PublishPlatform::Youtube),
            "stream" => Ok(PublishPlatform::Stream),
            "direct" => Ok(PublishPlatform::Direct),
            other => Err(CoreError::Validation(format!(
                "Invalid publish platform '{other}'. Must be one of: youtube, stream, direct"
            ))),
        }
    }
}

impl std::fmt::Display for PublishPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_platforms() {
        assert_eq!(PublishPlatform::parse("youtube").unwrap(), PublishPlatform::Youtube);
        assert_eq!(PublishPlatform::parse("stream").unwrap(), PublishPlatform::Stream);
        assert_eq!(PublishPlatform::parse("direct").unwrap(), PublishPlatform::Direct);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(PublishPlatform::parse("tiktok").is_err());
    }

    #[test]
    fn test_display_matches_stored_form() {
        assert_eq!(PublishPlatform::Direct.to_string(), "direct");
    }
}
