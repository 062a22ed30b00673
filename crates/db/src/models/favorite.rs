//! Favorite collection entity models and DTOs.

use kinoteka_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::movie::MovieRef;

/// A row from the `favorites` table: a viewer's named collection.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// A favorite with the movies it contains.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteDetail {
    #[serde(flatten)]
    pub favorite: Favorite,
    pub movies: Vec<MovieRef>,
}

/// DTO for creating a favorite collection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFavorite {
    pub name: String,
}

/// DTO for adding a movie to a favorite collection.
#[derive(Debug, Clone, Deserialize)]
pub struct AddFavoriteMovie {
    pub movie_id: DbId,
}
