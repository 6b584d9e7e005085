//! Publish target selection, resolved once at startup.
//!
//! The selection policy is first match wins: an explicit
//! `PUBLISH_PLATFORM` override, else the YouTube credential pair, else the
//! stream credential pair, else direct hosting. Handlers never re-read the
//! environment per call; the resolved target is injected through
//! [`crate::dispatcher::PublishDispatcher`].

use std::sync::Arc;

use reelgate_core::platform::PublishPlatform;

use crate::target::{DirectTarget, PublishTarget, StreamTarget, YouTubeTarget};

/// Credential pair for the YouTube integration.
#[derive(Debug, Clone)]
pub struct YouTubeCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Credential pair for the stream hosting integration.
#[derive(Debug, Clone)]
pub struct StreamCredentials {
    pub account_id: String,
    pub api_token: String,
}

/// Publish configuration resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    pub platform: PublishPlatform,
    pub youtube: Option<YouTubeCredentials>,
    pub stream: Option<StreamCredentials>,
}

impl PublishConfig {
    /// Load publish configuration from environment variables.
    ///
    /// | Variable                | Effect                                   |
    /// |-------------------------|------------------------------------------|
    /// | `PUBLISH_PLATFORM`      | explicit override: youtube/stream/direct |
    /// | `YOUTUBE_CLIENT_ID` + `YOUTUBE_CLIENT_SECRET` | selects youtube    |
    /// | `STREAM_ACCOUNT_ID` + `STREAM_API_TOKEN`      | selects stream     |
    /// | (none of the above)     | direct hosting                           |
    ///
    /// # Panics
    ///
    /// Panics if `PUBLISH_PLATFORM` names an unknown platform, or names a
    /// platform whose credential pair is missing. Misconfiguration should
    /// fail at startup, not at the first publish.
    pub fn from_env() -> Self {
        let youtube = match (
            std::env::var("YOUTUBE_CLIENT_ID").ok(),
            std::env::var("YOUTUBE_CLIENT_SECRET").ok(),
        ) {
            (Some(client_id), Some(client_secret)) => Some(YouTubeCredentials {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        let stream = match (
            std::env::var("STREAM_ACCOUNT_ID").ok(),
            std::env::var("STREAM_API_TOKEN").ok(),
        ) {
            (Some(account_id), Some(api_token)) => Some(StreamCredentials {
                account_id,
                api_token,
            }),
            _ => None,
        };

        let platform = match std::env::var("PUBLISH_PLATFORM").ok() {
            Some(explicit) => {
                let platform = PublishPlatform::parse(&explicit)
                    .unwrap_or_else(|e| panic!("Invalid PUBLISH_PLATFORM: {e}"));
                match platform {
                    PublishPlatform::Youtube if youtube.is_none() => {
                        panic!("PUBLISH_PLATFORM=youtube requires YOUTUBE_CLIENT_ID and YOUTUBE_CLIENT_SECRET")
                    }
                    PublishPlatform::Stream if stream.is_none() => {
                        panic!("PUBLISH_PLATFORM=stream requires STREAM_ACCOUNT_ID and STREAM_API_TOKEN")
                    }
                    other => other,
                }
            }
            None => Self::resolve_platform(youtube.is_some(), stream.is_some()),
        };

        Self {
            platform,
            youtube,
            stream,
        }
    }

    /// Credential-presence selection policy: youtube, then stream, then
    /// direct.
    pub fn resolve_platform(has_youtube: bool, has_stream: bool) -> PublishPlatform {
        if has_youtube {
            PublishPlatform::Youtube
        } else if has_stream {
            PublishPlatform::Stream
        } else {
            PublishPlatform::Direct
        }
    }

    /// Build the publish target for the resolved platform.
    pub fn build_target(&self) -> Arc<dyn PublishTarget> {
        match self.platform {
            PublishPlatform::Youtube => {
                let creds = self
                    .youtube
                    .as_ref()
                    .expect("youtube platform resolved without credentials");
                Arc::new(YouTubeTarget::new(
                    creds.client_id.clone(),
                    creds.client_secret.clone(),
                ))
            }
            PublishPlatform::Stream => {
                let creds = self
                    .stream
                    .as_ref()
                    .expect("stream platform resolved without credentials");
                Arc::new(StreamTarget::new(
                    creds.account_id.clone(),
                    creds.api_token.clone(),
                ))
            }
            PublishPlatform::Direct => Arc::new(DirectTarget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_wins_when_both_configured() {
        assert_eq!(
            PublishConfig::resolve_platform(true, true),
            PublishPlatform::Youtube
        );
    }

    #[test]
    fn test_stream_when_only_stream_configured() {
        assert_eq!(
            PublishConfig::resolve_platform(false, true),
            PublishPlatform::Stream
        );
    }

    #[test]
    fn test_direct_when_nothing_configured() {
        assert_eq!(
            PublishConfig::resolve_platform(false, false),
            PublishPlatform::Direct
        );
    }

    #[test]
    fn test_build_target_platform_tags() {
        let config = PublishConfig {
            platform: PublishPlatform::Direct,
            youtube: None,
            stream: None,
        };
        assert_eq!(config.build_target().platform(), "direct");

        let config = PublishConfig {
            platform: PublishPlatform::Youtube,
            youtube: Some(YouTubeCredentials {
                client_id: "id".into(),
                client_secret: "secret".into(),
            }),
            stream: None,
        };
        assert_eq!(config.build_target().platform(), "youtube");
    }
}
