use axum::routing::get;
use axum::Router;

use crate::handlers::client;
use crate::state::AppState;

/// Client routes, nested under `/clients`.
///
/// ```text
/// GET    /         list_clients
/// POST   /         create_client
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(client::list_clients).post(client::create_client))
}
