//! Dub-track entity model and DTOs.

use kinoteka_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movie_languages` table: one dubbed video per language.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieLanguage {
    pub id: DbId,
    pub movie_id: DbId,
    pub language: String,
    pub video_path: String,
}

/// DTO for adding a dub track to a movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovieLanguage {
    pub language: String,
    pub video_path: String,
}

/// DTO for updating a dub track.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovieLanguage {
    pub language: Option<String>,
    pub video_path: Option<String>,
}
