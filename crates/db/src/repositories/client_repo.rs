//! Repository for the `clients` table.

use reelgate_core::types::EntityId;
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient};

/// Column list for clients queries.
const CLIENT_COLUMNS: &str = "id, name, email, created_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Find a client by its id.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, email) VALUES ($1, $2) RETURNING {CLIENT_COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// List all clients, alphabetically by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {CLIENT_COLUMNS} FROM clients ORDER BY name ASC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }
}
