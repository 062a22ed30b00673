//! Repository for the `movie_languages` table.

use kinoteka_core::types::DbId;
use sqlx::PgPool;

use crate::models::language::{CreateMovieLanguage, MovieLanguage, UpdateMovieLanguage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, movie_id, language, video_path";

/// Provides CRUD operations for a movie's dub tracks.
pub struct LanguageRepo;

impl LanguageRepo {
    /// Insert a new dub track for a movie, returning the created row.
    pub async fn create(
        pool: &PgPool,
        movie_id: DbId,
        input: &CreateMovieLanguage,
    ) -> Result<MovieLanguage, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_languages (movie_id, language, video_path) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieLanguage>(&query)
            .bind(movie_id)
            .bind(&input.language)
            .bind(&input.video_path)
            .fetch_one(pool)
            .await
    }

    /// Find a dub track by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovieLanguage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie_languages WHERE id = $1");
        sqlx::query_as::<_, MovieLanguage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All dub tracks for a movie.
    pub async fn list_by_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<MovieLanguage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie_languages WHERE movie_id = $1 ORDER BY id");
        sqlx::query_as::<_, MovieLanguage>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Update a dub track. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovieLanguage,
    ) -> Result<Option<MovieLanguage>, sqlx::Error> {
        let query = format!(
            "UPDATE movie_languages SET \
                language = COALESCE($2, language), \
                video_path = COALESCE($3, video_path) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieLanguage>(&query)
            .bind(id)
            .bind(input.language.as_deref())
            .bind(input.video_path.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a dub track. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_languages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
