use axum::routing::{get, post};
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

/// Video routes, nested under `/videos`.
///
/// ```text
/// GET    /               list_videos
/// POST   /               create_video
/// GET    /{id}           get_video
/// POST   /{id}/submit    submit_for_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video::list_videos).post(video::create_video))
        .route("/{id}", get(video::get_video))
        .route("/{id}/submit", post(video::submit_for_review))
}
