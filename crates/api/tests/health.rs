mod common;

use axum::http::StatusCode;

/// Health endpoint reports ok with a reachable database.
#[sqlx::test(migrations = "../db/migrations")]
async fn health_returns_ok(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app.router, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
}

/// Responses carry a request id header.
#[sqlx::test(migrations = "../db/migrations")]
async fn responses_carry_request_id(pool: sqlx::PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app.router, "/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}
