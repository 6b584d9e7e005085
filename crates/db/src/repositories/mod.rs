//! Stateless repository structs. Each method takes a pool reference and
//! returns plain `sqlx::Error` results; domain-level error mapping happens
//! at the call sites.

pub mod client_repo;
pub mod feedback_repo;
pub mod user_repo;
pub mod video_repo;

pub use client_repo::ClientRepo;
pub use feedback_repo::FeedbackRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;
