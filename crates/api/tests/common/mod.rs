#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use reelgate_api::auth::jwt::{generate_access_token, JwtConfig};
use reelgate_api::auth::password::hash_password;
use reelgate_api::config::ServerConfig;
use reelgate_api::router::build_app_router;
use reelgate_api::state::AppState;
use reelgate_db::models::client::CreateClient;
use reelgate_db::models::video::{CreateVideo, StatusPatch, Video};
use reelgate_db::repositories::{ClientRepo, UserRepo, VideoRepo};
use reelgate_notify::{MailTransport, Notifier, NotifyError};
use reelgate_publish::target::DirectTarget;
use reelgate_publish::{PublishDispatcher, PublishTarget, PublishedAsset, TargetError};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// An email captured by [`MemoryMailer`].
#[derive(Debug, Clone)]
pub struct RecordedEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// In-memory mail transport that records every send instead of delivering.
#[derive(Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<RecordedEmail>>,
}

impl MemoryMailer {
    pub fn sent(&self) -> Vec<RecordedEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Wait until at least `n` emails have been recorded. Panics after two
    /// seconds; sends on the approve path run on a detached task.
    pub async fn wait_for_sent(&self, n: usize) -> Vec<RecordedEmail> {
        for _ in 0..100 {
            let sent = self.sent();
            if sent.len() >= n {
                return sent;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("expected at least {n} sent emails, got {:?}", self.sent());
    }
}

#[async_trait]
impl MailTransport for MemoryMailer {
    async fn send(
        &self,
        to_email: &str,
        subject: &str,
        body: String,
    ) -> Result<String, NotifyError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(RecordedEmail {
            to: to_email.to_string(),
            subject: subject.to_string(),
            body,
        });
        Ok(format!("test-email-{}", sent.len()))
    }
}

/// Publish target that always fails, for exercising the failure path.
pub struct FailingTarget;

#[async_trait]
impl PublishTarget for FailingTarget {
    fn platform(&self) -> &'static str {
        "direct"
    }

    async fn publish(&self, _video: &Video) -> Result<PublishedAsset, TargetError> {
        Err(TargetError::new("simulated platform outage"))
    }
}

/// The router under test plus handles to its recording doubles.
pub struct TestApp {
    pub router: Router,
    pub mailer: Arc<MemoryMailer>,
}

/// Build the full application router with the production middleware stack, a
/// direct publish target, and a recording mail transport.
pub fn build_test_app(pool: PgPool) -> TestApp {
    build_test_app_with_target(pool, Arc::new(DirectTarget))
}

/// Same as [`build_test_app`] but with a caller-supplied publish target.
pub fn build_test_app_with_target(pool: PgPool, target: Arc<dyn PublishTarget>) -> TestApp {
    let config = test_config();
    let mailer = Arc::new(MemoryMailer::default());
    let notifier = Arc::new(Notifier::new(mailer.clone() as Arc<dyn MailTransport>));
    let dispatcher = Arc::new(PublishDispatcher::new(target, Arc::clone(&notifier)));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        dispatcher,
        notifier,
    };

    TestApp {
        router: build_app_router(state, &config),
        mailer,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::get(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// Insert an admin user and return a valid access token for them.
pub async fn seed_admin(pool: &PgPool) -> String {
    let hash = hash_password("test-password").unwrap();
    let user = UserRepo::create(pool, "admin@example.com", &hash, "admin")
        .await
        .unwrap();
    generate_access_token(user.id, &user.role, &test_config().jwt).unwrap()
}

pub async fn seed_client(pool: &PgPool, name: &str, email: &str) -> uuid::Uuid {
    ClientRepo::create(
        pool,
        &CreateClient {
            name: name.to_string(),
            email: email.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

/// Insert a video for `client_id` and move it to `status`.
pub async fn seed_video(pool: &PgPool, client_id: uuid::Uuid, status: &str) -> Video {
    let video = VideoRepo::create(
        pool,
        &CreateVideo {
            title: "Launch teaser".to_string(),
            description: Some("Cut 3".to_string()),
            client_id,
            video_url: "https://cdn.example.com/teaser.mp4".to_string(),
            thumbnail_url: None,
            duration_seconds: Some(87.0),
            file_size: None,
            mime_type: Some("video/mp4".to_string()),
            metadata: None,
        },
    )
    .await
    .unwrap();

    if status == "draft" {
        return video;
    }
    VideoRepo::update_status(pool, video.id, status, &StatusPatch::default())
        .await
        .unwrap()
        .unwrap()
}
