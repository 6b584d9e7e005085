use std::sync::Arc;

use reelgate_notify::Notifier;
use reelgate_publish::PublishDispatcher;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: reelgate_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Publish dispatcher with the startup-resolved target platform.
    pub dispatcher: Arc<PublishDispatcher>,
    /// Email notifier for direct `/api/send-notification` calls.
    pub notifier: Arc<Notifier>,
}
