//! Notification kinds and plain-text message templates.

use reelgate_core::error::CoreError;

/// The kind of status-change notification being sent.
///
/// The string forms match the `type` field of the `/api/send-notification`
/// wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Sent after a successful publish.
    VideoPublished,
    /// Sent when a reviewer approves a video and publishing begins.
    VideoApproved,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::VideoPublished => "video_published",
            NotificationKind::VideoApproved => "video_approved",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "video_published" => Ok(NotificationKind::VideoPublished),
            "video_approved" => Ok(NotificationKind::VideoApproved),
            other => Err(CoreError::Validation(format!(
                "Unknown notification type '{other}'"
            ))),
        }
    }

    /// Render the email subject and plain-text body for this kind.
    ///
    /// `published_url` and `platform` are only meaningful for
    /// [`NotificationKind::VideoPublished`]; they are ignored otherwise.
    pub fn render(
        self,
        video_title: &str,
        published_url: Option<&str>,
        platform: Option<&str>,
    ) -> (String, String) {
        match self {
            NotificationKind::VideoPublished => {
                let platform = platform.unwrap_or("direct");
                let subject = "Your video has been published".to_string();
                let mut body = format!(
                    "Great news!\n\n\
                     Your video \"{video_title}\" has been published to {platform}.\n"
                );
                if let Some(url) = published_url {
                    body.push_str(&format!("\nWatch it here: {url}\n"));
                }
                body.push_str(
                    "\nThis email was sent because your video was approved and \
                     published automatically.\n",
                );
                (subject, body)
            }
            NotificationKind::VideoApproved => {
                let subject = "Video approved - publishing soon".to_string();
                let body = format!(
                    "Thank you for your approval!\n\n\
                     Your video \"{video_title}\" has been approved and is now being \
                     published automatically.\n\n\
                     You'll receive another email once the video is live.\n"
                );
                (subject, body)
            }
        }
    }
}
