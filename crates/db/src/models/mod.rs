//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Patch structs for partial updates where the domain needs them

pub mod client;
pub mod feedback;
pub mod user;
pub mod video;
