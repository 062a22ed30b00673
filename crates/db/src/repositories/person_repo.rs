//! Repositories for the `actors` and `directors` tables.
//!
//! The two tables share a column set and the [`Person`] model; each repo
//! keeps its own SQL because actor credits and director credits are
//! distinct relations on a movie.

use kinoteka_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::MovieRef;
use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, bio, age, image_path";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO actors (name, bio, age, image_path) \
             VALUES ($1, $2, COALESCE($3, 0), $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(input.bio.as_deref())
            .bind(input.age)
            .bind(input.image_path.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find an actor by their internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all actors, alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY name, id");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// Update an actor. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE actors SET \
                name = COALESCE($2, name), \
                bio = COALESCE($3, bio), \
                age = COALESCE($4, age), \
                image_path = COALESCE($5, image_path) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.bio.as_deref())
            .bind(input.age)
            .bind(input.image_path.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete an actor. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Movies the actor is credited in, newest first.
    pub async fn movies_for(pool: &PgPool, actor_id: DbId) -> Result<Vec<MovieRef>, sqlx::Error> {
        sqlx::query_as::<_, MovieRef>(
            "SELECT m.id, m.name, m.year FROM movie_actors ma \
             JOIN movies m ON m.id = ma.movie_id \
             WHERE ma.actor_id = $1 ORDER BY m.year DESC, m.id",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await
    }
}

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO directors (name, bio, age, image_path) \
             VALUES ($1, $2, COALESCE($3, 0), $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(input.bio.as_deref())
            .bind(input.age)
            .bind(input.image_path.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find a director by their internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all directors, alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors ORDER BY name, id");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// Update a director. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE directors SET \
                name = COALESCE($2, name), \
                bio = COALESCE($3, bio), \
                age = COALESCE($4, age), \
                image_path = COALESCE($5, image_path) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.bio.as_deref())
            .bind(input.age)
            .bind(input.image_path.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a director. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM directors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Movies the director is credited on, newest first.
    pub async fn movies_for(
        pool: &PgPool,
        director_id: DbId,
    ) -> Result<Vec<MovieRef>, sqlx::Error> {
        sqlx::query_as::<_, MovieRef>(
            "SELECT m.id, m.name, m.year FROM movie_directors md \
             JOIN movies m ON m.id = md.movie_id \
             WHERE md.director_id = $1 ORDER BY m.year DESC, m.id",
        )
        .bind(director_id)
        .fetch_all(pool)
        .await
    }
}
