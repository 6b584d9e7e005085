mod common;

use axum::http::StatusCode;
use serde_json::json;

/// A well-formed request sends the email and returns its id.
#[sqlx::test(migrations = "../db/migrations")]
async fn sends_published_notification(pool: sqlx::PgPool) {
    let client_id = common::seed_client(&pool, "Acme", "acme@example.com").await;
    let video = common::seed_video(&pool, client_id, "published").await;
    let app = common::build_test_app(pool);

    let response = common::post_json(
        app.router,
        "/api/send-notification",
        json!({
            "type": "video_published",
            "videoId": video.id,
            "clientId": client_id,
            "videoTitle": "Launch teaser",
            "publishedUrl": "https://cdn.example.com/teaser.mp4",
            "platform": "direct"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body["emailId"].as_str().is_some_and(|id| !id.is_empty()));

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "acme@example.com");
    assert!(sent[0].body.contains("Launch teaser"));
}

/// Missing required fields are a 400 with the preserved message.
#[sqlx::test(migrations = "../db/migrations")]
async fn missing_fields_are_400(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app.router,
        "/api/send-notification",
        json!({ "type": "video_published" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Missing required fields");
}

/// Unknown notification types are a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_type_is_400(pool: sqlx::PgPool) {
    let client_id = common::seed_client(&pool, "Acme", "acme@example.com").await;
    let app = common::build_test_app(pool);

    let response = common::post_json(
        app.router,
        "/api/send-notification",
        json!({
            "type": "video_archived",
            "videoId": uuid::Uuid::new_v4(),
            "clientId": client_id
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Unknown notification type");
}

/// A client without a usable email address is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn unresolvable_client_is_404(pool: sqlx::PgPool) {
    // The repo layer permits a blank email; only the API validates it.
    let blank_email = common::seed_client(&pool, "Acme", "").await;
    let app = common::build_test_app(pool);

    for client_id in [blank_email, uuid::Uuid::new_v4()] {
        let response = common::post_json(
            app.router.clone(),
            "/api/send-notification",
            json!({
                "type": "video_approved",
                "videoId": uuid::Uuid::new_v4(),
                "clientId": client_id
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = common::body_json(response).await;
        assert_eq!(body["error"], "Client email not found");
    }

    assert!(app.mailer.sent().is_empty());
}
