//! Status-change email notifications.
//!
//! Notification is observability, never a correctness dependency: callers
//! on the approve/publish path log delivery failures and move on. The only
//! place a delivery error reaches a client is the explicit
//! `/api/send-notification` endpoint.

pub mod config;
pub mod error;
pub mod notifier;
pub mod template;
pub mod transport;

pub use config::EmailConfig;
pub use error::NotifyError;
pub use notifier::Notifier;
pub use template::NotificationKind;
pub use transport::{MailTransport, SmtpMailer};
