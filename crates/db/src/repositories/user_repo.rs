//! Repository for the `user_profiles` table.

use kinoteka_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, UserProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, phone_number, age, status, \
                       is_active, created_at, updated_at";

/// Provides CRUD operations for viewer profiles.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new viewer, returning the created row.
    ///
    /// Duplicate usernames/emails surface as 23505 on `uq_user_profiles_*`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profiles (username, email, password_hash, phone_number, age, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.phone_number.as_deref())
            .bind(input.age)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a viewer by their internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a viewer by username (login path).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE username = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List all viewers.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles ORDER BY id");
        sqlx::query_as::<_, UserProfile>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a viewer profile. Only non-`None` fields are applied;
    /// username is immutable.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE user_profiles SET \
                email = COALESCE($2, email), \
                phone_number = COALESCE($3, phone_number), \
                age = COALESCE($4, age), \
                status = COALESCE($5, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(id)
            .bind(input.email.as_deref())
            .bind(input.phone_number.as_deref())
            .bind(input.age)
            .bind(input.status.map(|t| t.as_str()))
            .fetch_optional(pool)
            .await
    }

    /// Deactivate a viewer (set is_active = false). Returns true if the
    /// row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE user_profiles SET is_active = false WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
