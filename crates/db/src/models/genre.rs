//! Genre entity model and DTOs.

use kinoteka_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub name: String,
}

/// DTO for renaming a genre.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGenre {
    pub name: Option<String>,
}
