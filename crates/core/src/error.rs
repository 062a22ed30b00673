//! Error kinds surfaced by catalog business rules.
//!
//! These are business outcomes, not transient faults: callers propagate them
//! unmodified and the HTTP layer maps each variant to a status code. Storage
//! failures are not represented here; they pass through as `sqlx::Error`.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No movie/user/relation with the given identifier exists.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed input: filter value, out-of-range stars, under-18 age, ...
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The viewer is not authenticated at all.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The viewer is authenticated but their tier does not grant access.
    /// Distinct from [`CoreError::NotFound`]: the record's existence is
    /// already known to the caller.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
