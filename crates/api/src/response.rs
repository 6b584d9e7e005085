//! Shared response envelope types for API handlers.
//!
//! Workflow and admin responses use a `{ "data": ... }` envelope. The two
//! preserved wire contracts (`/api/publish-video`, `/api/send-notification`)
//! keep their original flat shapes and bypass this envelope.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
