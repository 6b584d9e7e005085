mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use reelgate_db::repositories::VideoRepo;

/// A missing videoId is a 400 with the preserved message.
#[sqlx::test(migrations = "../db/migrations")]
async fn missing_video_id_is_400(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(app.router, "/api/publish-video", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Video ID is required");
}

/// An unknown video id is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_video_is_404(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app.router,
        "/api/publish-video",
        json!({ "videoId": uuid::Uuid::new_v4() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Video not found");
}

/// Publishing a non-approved video is refused without mutating the record.
#[sqlx::test(migrations = "../db/migrations")]
async fn draft_video_is_refused(pool: sqlx::PgPool) {
    let client_id = common::seed_client(&pool, "Acme", "acme@example.com").await;
    let video = common::seed_video(&pool, client_id, "draft").await;
    let app = common::build_test_app(pool.clone());

    let response = common::post_json(
        app.router,
        "/api/publish-video",
        json!({ "videoId": video.id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Video must be approved before publishing");

    let stored = VideoRepo::find_by_id(&pool, video.id).await.unwrap().unwrap();
    assert_eq!(stored.status, "draft");
    assert_eq!(stored.metadata, json!({}));
}

/// Publishing an approved video returns the preserved success shape and
/// moves the record to published.
#[sqlx::test(migrations = "../db/migrations")]
async fn approved_video_publishes(pool: sqlx::PgPool) {
    let client_id = common::seed_client(&pool, "Acme", "acme@example.com").await;
    let video = common::seed_video(&pool, client_id, "approved").await;
    let app = common::build_test_app(pool.clone());

    let response = common::post_json(
        app.router,
        "/api/publish-video",
        json!({ "videoId": video.id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["publishedUrl"], "https://cdn.example.com/teaser.mp4");
    assert_eq!(body["platform"], "direct");

    let stored = VideoRepo::find_by_id(&pool, video.id).await.unwrap().unwrap();
    assert_eq!(stored.status, "published");
    assert!(stored.published_at.is_some());

    app.mailer.wait_for_sent(1).await;
}

/// A target failure returns 500 with details, and the record stays
/// approved with the error annotated for a later retry.
#[sqlx::test(migrations = "../db/migrations")]
async fn target_failure_leaves_record_retryable(pool: sqlx::PgPool) {
    let client_id = common::seed_client(&pool, "Acme", "acme@example.com").await;
    let video = common::seed_video(&pool, client_id, "approved").await;
    let app = common::build_test_app_with_target(pool.clone(), Arc::new(common::FailingTarget));

    let response = common::post_json(
        app.router,
        "/api/publish-video",
        json!({ "videoId": video.id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Failed to publish video");
    assert_eq!(body["details"], "simulated platform outage");

    let stored = VideoRepo::find_by_id(&pool, video.id).await.unwrap().unwrap();
    assert_eq!(stored.status, "approved");
    assert_eq!(stored.metadata["publishError"], "simulated platform outage");
    assert!(stored.published_at.is_none());
}
