//! Mail transport seam.
//!
//! [`MailTransport`] abstracts the actual send so the notifier can be
//! exercised in tests with an in-memory recorder. The production
//! implementation is [`SmtpMailer`], which wraps the lettre async SMTP
//! transport.

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::EmailConfig;
use crate::error::NotifyError;

/// Sends a rendered message to a single recipient.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Send the message, returning a transport-assigned message id.
    async fn send(
        &self,
        to_email: &str,
        subject: &str,
        body: String,
    ) -> Result<String, NotifyError>;
}

/// Production SMTP transport backed by lettre.
pub struct SmtpMailer {
    config: EmailConfig,
}

impl SmtpMailer {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(
        &self,
        to_email: &str,
        subject: &str,
        body: String,
    ) -> Result<String, NotifyError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let message_id = Uuid::new_v4().to_string();

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to_email.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = to_email, message_id = %message_id, "Notification email sent");
        Ok(message_id)
    }
}

/// Transport used when SMTP is not configured: every send fails with
/// [`NotifyError::NotConfigured`]. Best-effort call sites log and continue.
pub struct DisabledMailer;

#[async_trait]
impl MailTransport for DisabledMailer {
    async fn send(
        &self,
        _to_email: &str,
        _subject: &str,
        _body: String,
    ) -> Result<String, NotifyError> {
        Err(NotifyError::NotConfigured)
    }
}
