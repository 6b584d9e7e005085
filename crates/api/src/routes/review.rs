use axum::routing::{get, post};
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Review session routes, nested under `/review`. Public: access is scoped
/// by knowledge of the video id in the shared link.
///
/// ```text
/// GET    /{id}             load_session
/// POST   /{id}/feedback    submit_feedback
/// POST   /{id}/approve     approve
/// POST   /{id}/reject      reject
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(review::load_session))
        .route("/{id}/feedback", post(review::submit_feedback))
        .route("/{id}/approve", post(review::approve))
        .route("/{id}/reject", post(review::reject))
}
