use axum::routing::post;
use axum::Router;

use crate::handlers::publish;
use crate::state::AppState;

/// Preserved wire contract route.
///
/// ```text
/// POST   /publish-video    publish_video
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/publish-video", post(publish::publish_video))
}
