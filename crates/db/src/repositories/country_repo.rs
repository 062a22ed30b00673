//! Repository for the `countries` table.

use kinoteka_core::types::DbId;
use sqlx::PgPool;

use crate::models::country::{Country, CreateCountry, UpdateCountry};

/// Provides CRUD operations for countries.
pub struct CountryRepo;

impl CountryRepo {
    /// Insert a new country, returning the created row.
    ///
    /// Names are unique; a duplicate surfaces as a 23505 on
    /// `uq_countries_name`.
    pub async fn create(pool: &PgPool, input: &CreateCountry) -> Result<Country, sqlx::Error> {
        sqlx::query_as::<_, Country>(
            "INSERT INTO countries (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&input.name)
        .fetch_one(pool)
        .await
    }

    /// Find a country by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Country>, sqlx::Error> {
        sqlx::query_as::<_, Country>("SELECT id, name FROM countries WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all countries, alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Country>, sqlx::Error> {
        sqlx::query_as::<_, Country>("SELECT id, name FROM countries ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Rename a country. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCountry,
    ) -> Result<Option<Country>, sqlx::Error> {
        sqlx::query_as::<_, Country>(
            "UPDATE countries SET name = COALESCE($2, name) WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(input.name.as_deref())
        .fetch_optional(pool)
        .await
    }

    /// Delete a country. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
