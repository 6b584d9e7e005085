//! Domain logic shared by every reelgate crate.
//!
//! Contains no I/O: the error taxonomy, shared type aliases, the video
//! status model with its transition rules, and publish-platform constants.

pub mod error;
pub mod platform;
pub mod status;
pub mod types;
