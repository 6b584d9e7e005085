//! Request handlers, one module per resource.

pub mod auth;
pub mod client;
pub mod notification;
pub mod publish;
pub mod review;
pub mod video;
