//! Rating entity model and DTOs.

use kinoteka_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ratings` table.
///
/// `parent_id` keys into the same table, forming a reply thread. Rows are
/// served flat (an arena keyed by id); thread assembly is the client's
/// concern, so unbounded or cyclic chains cannot hang the server.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub movie_id: DbId,
    pub user_id: DbId,
    pub stars: i32,
    pub parent_id: Option<DbId>,
    pub text: String,
    pub created_at: Timestamp,
}

/// DTO for creating a rating or a reply to one.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRating {
    pub movie_id: DbId,
    pub stars: i32,
    pub parent_id: Option<DbId>,
    pub text: String,
}
