//! Handlers for the `/clients` resource. Admin only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use reelgate_core::error::CoreError;
use reelgate_db::models::client::CreateClient;
use reelgate_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/clients
pub async fn list_clients(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: clients }))
}

/// POST /api/clients
pub async fn create_client(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let client = ClientRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = %auth.user_id, client_id = %client.id, "Client created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: client })))
}
