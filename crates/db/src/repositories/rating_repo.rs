//! Repository for the `ratings` table.

use kinoteka_core::types::DbId;
use sqlx::PgPool;

use crate::models::rating::{CreateRating, Rating};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, movie_id, user_id, stars, parent_id, text, created_at";

/// Provides operations for ratings and their reply threads.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert a new rating, returning the created row. Star range and
    /// parent existence are validated by the caller.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateRating,
    ) -> Result<Rating, sqlx::Error> {
        let query = format!(
            "INSERT INTO ratings (movie_id, user_id, stars, parent_id, text) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(input.movie_id)
            .bind(user_id)
            .bind(input.stars)
            .bind(input.parent_id)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    /// Find a rating by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rating>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ratings WHERE id = $1");
        sqlx::query_as::<_, Rating>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All ratings for a movie, oldest first, replies included.
    ///
    /// Returned flat; `parent_id` keys into the same result set.
    pub async fn list_by_movie(pool: &PgPool, movie_id: DbId) -> Result<Vec<Rating>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ratings WHERE movie_id = $1 ORDER BY id");
        sqlx::query_as::<_, Rating>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Just the star values for a movie, for aggregation.
    pub async fn stars_for_movie(pool: &PgPool, movie_id: DbId) -> Result<Vec<i32>, sqlx::Error> {
        let rows: Vec<(i32,)> = sqlx::query_as("SELECT stars FROM ratings WHERE movie_id = $1")
            .bind(movie_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|(stars,)| stars).collect())
    }

    /// Delete a rating (cascades to its replies). Returns true if a row
    /// was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ratings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
