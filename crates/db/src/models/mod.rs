//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod country;
pub mod favorite;
pub mod genre;
pub mod history;
pub mod language;
pub mod moment;
pub mod movie;
pub mod person;
pub mod rating;
pub mod session;
pub mod user;
