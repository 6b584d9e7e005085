mod common;

use axum::http::StatusCode;
use serde_json::json;

/// Creating a video puts it in draft with empty metadata.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_video_starts_in_draft(pool: sqlx::PgPool) {
    let token = common::seed_admin(&pool).await;
    let client_id = common::seed_client(&pool, "Acme", "acme@example.com").await;
    let app = common::build_test_app(pool);

    let response = common::post_json_auth(
        app.router,
        "/api/videos",
        &token,
        json!({
            "title": "Launch teaser",
            "client_id": client_id,
            "video_url": "https://cdn.example.com/teaser.mp4",
            "duration_seconds": 87.0,
            "mime_type": "video/mp4"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = common::body_json(response).await;
    assert_eq!(body["data"]["status"], "draft");
    assert_eq!(body["data"]["title"], "Launch teaser");
    assert_eq!(body["data"]["metadata"], json!({}));
    assert!(body["data"]["approved_at"].is_null());
}

/// Creating a video for an unknown client is a 404, not a foreign key error.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_video_unknown_client_is_404(pool: sqlx::PgPool) {
    let token = common::seed_admin(&pool).await;
    let app = common::build_test_app(pool);

    let response = common::post_json_auth(
        app.router,
        "/api/videos",
        &token,
        json!({
            "title": "Orphan",
            "client_id": uuid::Uuid::new_v4(),
            "video_url": "https://cdn.example.com/x.mp4"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// An empty title is rejected before touching the database.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_video_empty_title_is_400(pool: sqlx::PgPool) {
    let token = common::seed_admin(&pool).await;
    let client_id = common::seed_client(&pool, "Acme", "acme@example.com").await;
    let app = common::build_test_app(pool);

    let response = common::post_json_auth(
        app.router,
        "/api/videos",
        &token,
        json!({
            "title": "",
            "client_id": client_id,
            "video_url": "https://cdn.example.com/x.mp4"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Listing supports status filters and rejects unknown statuses.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_videos_filters_by_status(pool: sqlx::PgPool) {
    let token = common::seed_admin(&pool).await;
    let client_id = common::seed_client(&pool, "Acme", "acme@example.com").await;
    common::seed_video(&pool, client_id, "draft").await;
    common::seed_video(&pool, client_id, "review").await;
    let app = common::build_test_app(pool);

    let response =
        common::get_auth(app.router.clone(), "/api/videos?status=review", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["status"], "review");

    let bad = common::get_auth(app.router, "/api/videos?status=archived", &token).await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}

/// Submitting a draft moves it to review; submitting again is refused.
#[sqlx::test(migrations = "../db/migrations")]
async fn submit_for_review_transitions_draft_only(pool: sqlx::PgPool) {
    let token = common::seed_admin(&pool).await;
    let client_id = common::seed_client(&pool, "Acme", "acme@example.com").await;
    let video = common::seed_video(&pool, client_id, "draft").await;
    let app = common::build_test_app(pool);

    let uri = format!("/api/videos/{}/submit", video.id);
    let response =
        common::post_json_auth(app.router.clone(), &uri, &token, json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["data"]["status"], "review");

    let again = common::post_json_auth(app.router, &uri, &token, json!({})).await;
    assert_eq!(again.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(again).await;
    assert_eq!(body["code"], "PRECONDITION_FAILED");
}

/// Fetching an unknown video id returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn get_unknown_video_is_404(pool: sqlx::PgPool) {
    let token = common::seed_admin(&pool).await;
    let app = common::build_test_app(pool);

    let uri = format!("/api/videos/{}", uuid::Uuid::new_v4());
    let response = common::get_auth(app.router, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
