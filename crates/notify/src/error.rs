use reelgate_core::types::EntityId;

/// Error type for notification failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// No email address could be resolved for the video's owning client.
    #[error("No email address found for client {client_id}")]
    RecipientNotFound { client_id: EntityId },

    /// Email delivery is not configured (`SMTP_HOST` unset).
    #[error("Email delivery is not configured")]
    NotConfigured,

    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// Recipient lookup failed at the database layer.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
