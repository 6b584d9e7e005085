//! Recipient resolution and send orchestration.

use std::sync::Arc;

use sqlx::PgPool;

use reelgate_core::types::EntityId;
use reelgate_db::repositories::ClientRepo;

use crate::config::EmailConfig;
use crate::error::NotifyError;
use crate::template::NotificationKind;
use crate::transport::{DisabledMailer, MailTransport, SmtpMailer};

/// Sends status-change emails to the client that owns a video.
pub struct Notifier {
    transport: Arc<dyn MailTransport>,
}

impl Notifier {
    pub fn new(transport: Arc<dyn MailTransport>) -> Self {
        Self { transport }
    }

    /// Build a notifier from the process environment: SMTP when configured,
    /// otherwise a disabled transport whose sends fail with `NotConfigured`.
    pub fn from_env() -> Self {
        match EmailConfig::from_env() {
            Some(config) => Self::new(Arc::new(SmtpMailer::new(config))),
            None => {
                tracing::warn!("SMTP_HOST not set; email notifications are disabled");
                Self::new(Arc::new(DisabledMailer))
            }
        }
    }

    /// Resolve the client's email, render the template for `kind`, and send.
    ///
    /// Returns the transport message id on success. Fails with
    /// [`NotifyError::RecipientNotFound`] when the client row is missing or
    /// has a blank email address.
    pub async fn notify(
        &self,
        pool: &PgPool,
        kind: NotificationKind,
        client_id: EntityId,
        video_title: &str,
        published_url: Option<&str>,
        platform: Option<&str>,
    ) -> Result<String, NotifyError> {
        let client = ClientRepo::find_by_id(pool, client_id)
            .await?
            .filter(|c| !c.email.trim().is_empty())
            .ok_or(NotifyError::RecipientNotFound { client_id })?;

        let (subject, body) = kind.render(video_title, published_url, platform);
        self.transport.send(&client.email, &subject, body).await
    }
}
