//! Repository for the `moments` table.

use kinoteka_core::types::DbId;
use sqlx::PgPool;

use crate::models::moment::{CreateMoment, Moment};

/// Provides operations for a movie's still images.
pub struct MomentRepo;

impl MomentRepo {
    /// Insert a new moment for a movie, returning the created row.
    pub async fn create(
        pool: &PgPool,
        movie_id: DbId,
        input: &CreateMoment,
    ) -> Result<Moment, sqlx::Error> {
        sqlx::query_as::<_, Moment>(
            "INSERT INTO moments (movie_id, image_path) VALUES ($1, $2) \
             RETURNING id, movie_id, image_path",
        )
        .bind(movie_id)
        .bind(&input.image_path)
        .fetch_one(pool)
        .await
    }

    /// Find a moment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Moment>, sqlx::Error> {
        sqlx::query_as::<_, Moment>(
            "SELECT id, movie_id, image_path FROM moments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// All moments for a movie.
    pub async fn list_by_movie(pool: &PgPool, movie_id: DbId) -> Result<Vec<Moment>, sqlx::Error> {
        sqlx::query_as::<_, Moment>(
            "SELECT id, movie_id, image_path FROM moments WHERE movie_id = $1 ORDER BY id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Delete a moment. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM moments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
