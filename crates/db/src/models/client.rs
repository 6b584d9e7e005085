//! Client entity model and DTOs.

use reelgate_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `clients` table. Clients own videos and receive
/// notification emails.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// DTO for creating a client.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClient {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}
