//! Repository for the `favorites` and `favorite_movies` tables.

use kinoteka_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite::{CreateFavorite, Favorite};
use crate::models::movie::MovieRef;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, created_at";

/// Provides operations for a viewer's favorite collections.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Create a new named collection for a viewer.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateFavorite,
    ) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (user_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a collection by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE id = $1");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All collections owned by a viewer.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a collection and its entries. Returns true if a row was
    /// deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Add a movie to a collection. Duplicates surface as 23505 on
    /// `uq_favorite_movies`.
    pub async fn add_movie(
        pool: &PgPool,
        favorite_id: DbId,
        movie_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO favorite_movies (favorite_id, movie_id) VALUES ($1, $2)")
            .bind(favorite_id)
            .bind(movie_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Remove a movie from a collection. Returns true if an entry was
    /// removed.
    pub async fn remove_movie(
        pool: &PgPool,
        favorite_id: DbId,
        movie_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM favorite_movies WHERE favorite_id = $1 AND movie_id = $2")
                .bind(favorite_id)
                .bind(movie_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The movies in a collection, in the order they were added.
    pub async fn movies_for(
        pool: &PgPool,
        favorite_id: DbId,
    ) -> Result<Vec<MovieRef>, sqlx::Error> {
        sqlx::query_as::<_, MovieRef>(
            "SELECT m.id, m.name, m.year FROM favorite_movies fm \
             JOIN movies m ON m.id = fm.movie_id \
             WHERE fm.favorite_id = $1 ORDER BY fm.id",
        )
        .bind(favorite_id)
        .fetch_all(pool)
        .await
    }
}
