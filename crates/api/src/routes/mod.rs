pub mod auth;
pub mod client;
pub mod health;
pub mod notification;
pub mod publish;
pub mod review;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                  login (public)
///
/// /clients                     list, create (admin)
///
/// /videos                      list, create (admin)
/// /videos/{id}                 get (admin)
/// /videos/{id}/submit          move draft -> review (admin)
///
/// /review/{id}                 video + feedback (public, link-scoped)
/// /review/{id}/feedback        append feedback
/// /review/{id}/approve         approve + synchronous publish
/// /review/{id}/reject          reject
///
/// /publish-video               preserved wire contract
/// /send-notification           preserved wire contract
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/clients", client::router())
        .nest("/videos", video::router())
        .nest("/review", review::router())
        .merge(publish::router())
        .merge(notification::router())
}
