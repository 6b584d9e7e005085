//! Publish dispatch: moves an approved video to `published` through a
//! configured target platform, or annotates the failure and leaves the
//! record retryable.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod target;

pub use config::PublishConfig;
pub use dispatcher::PublishDispatcher;
pub use error::PublishError;
pub use target::{PublishTarget, PublishedAsset, TargetError};
