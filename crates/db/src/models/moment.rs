//! Still-image ("moment") entity model and DTOs.

use kinoteka_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `moments` table: a still image owned by a movie.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Moment {
    pub id: DbId,
    pub movie_id: DbId,
    pub image_path: String,
}

/// DTO for adding a moment to a movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMoment {
    pub image_path: String,
}
