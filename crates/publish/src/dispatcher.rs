//! The approved -> published orchestration.

use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;

use reelgate_core::status::VideoStatus;
use reelgate_db::models::video::{StatusPatch, Video};
use reelgate_db::repositories::VideoRepo;
use reelgate_notify::{NotificationKind, Notifier};

use crate::error::PublishError;
use crate::target::PublishTarget;

/// Dispatches publish requests for approved videos.
///
/// Fails closed: a video that is not in `approved` status is refused
/// without any mutation. A target failure is merged into the record's
/// `metadata.publishError` while the status stays `approved`, so the
/// persisted state always remains retryable; there is deliberately no
/// terminal failure status.
pub struct PublishDispatcher {
    target: Arc<dyn PublishTarget>,
    notifier: Arc<Notifier>,
}

impl PublishDispatcher {
    pub fn new(target: Arc<dyn PublishTarget>, notifier: Arc<Notifier>) -> Self {
        Self { target, notifier }
    }

    /// The platform tag of the configured target.
    pub fn platform(&self) -> &'static str {
        self.target.platform()
    }

    /// Publish `video` and persist the outcome.
    ///
    /// On success the returned video has status `published` with
    /// `published_at`/`published_url`/`published_platform` set, and a
    /// best-effort notification is fired on a detached task (its failure is
    /// logged, never propagated). On target failure the error is returned
    /// to the caller after the record has been annotated.
    pub async fn dispatch(&self, pool: &PgPool, video: &Video) -> Result<Video, PublishError> {
        let status = VideoStatus::parse(&video.status)
            .map_err(|e| PublishError::Precondition(e.to_string()))?;
        if status != VideoStatus::Approved {
            return Err(PublishError::Precondition(format!(
                "Video must be approved before publishing (current status: {status})"
            )));
        }

        match self.target.publish(video).await {
            Ok(asset) => {
                let patch = StatusPatch {
                    published_at: Some(Utc::now()),
                    published_url: Some(asset.url.clone()),
                    published_platform: Some(self.target.platform().to_string()),
                    ..StatusPatch::default()
                };
                let published = VideoRepo::update_status(
                    pool,
                    video.id,
                    VideoStatus::Published.as_str(),
                    &patch,
                )
                .await?
                .ok_or(sqlx::Error::RowNotFound)?;

                tracing::info!(
                    video_id = %published.id,
                    platform = self.target.platform(),
                    url = %asset.url,
                    "Video published"
                );

                self.notify_published(pool, &published);
                Ok(published)
            }
            Err(target_err) => {
                let message = target_err.message.clone();
                tracing::error!(video_id = %video.id, error = %message, "Publish target failed");

                VideoRepo::record_publish_error(pool, video.id, &message).await?;
                Err(PublishError::Target(message))
            }
        }
    }

    /// Fire-and-forget published notification. Delivery failures are logged
    /// on the detached task and never reach the dispatch caller.
    fn notify_published(&self, pool: &PgPool, video: &Video) {
        let notifier = Arc::clone(&self.notifier);
        let pool = pool.clone();
        let client_id = video.client_id;
        let video_id = video.id;
        let title = video.title.clone();
        let url = video.published_url.clone();
        let platform = video.published_platform.clone();

        tokio::spawn(async move {
            let result = notifier
                .notify(
                    &pool,
                    NotificationKind::VideoPublished,
                    client_id,
                    &title,
                    url.as_deref(),
                    platform.as_deref(),
                )
                .await;
            if let Err(e) = result {
                tracing::warn!(video_id = %video_id, error = %e, "Publish notification failed");
            }
        });
    }
}
