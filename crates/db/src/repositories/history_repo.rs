//! Repository for the `history` table.
//!
//! The access log is append-only: rows are recorded and listed, never
//! updated or deleted through the API.

use kinoteka_core::types::DbId;
use sqlx::PgPool;

use crate::models::history::{HistoryEntry, HistoryWithMovie};
use crate::repositories::{clamp_limit, clamp_offset};

/// Provides append and listing operations for viewing history.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Record that a viewer watched a movie, returning the created row.
    pub async fn record(
        pool: &PgPool,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<HistoryEntry, sqlx::Error> {
        sqlx::query_as::<_, HistoryEntry>(
            "INSERT INTO history (user_id, movie_id) VALUES ($1, $2) \
             RETURNING id, user_id, movie_id, viewed_at",
        )
        .bind(user_id)
        .bind(movie_id)
        .fetch_one(pool)
        .await
    }

    /// A viewer's history, most recent first, with movie names joined in.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<HistoryWithMovie>, sqlx::Error> {
        sqlx::query_as::<_, HistoryWithMovie>(
            "SELECT h.id, h.movie_id, m.name AS movie_name, h.viewed_at \
             FROM history h \
             JOIN movies m ON m.id = h.movie_id \
             WHERE h.user_id = $1 \
             ORDER BY h.viewed_at DESC, h.id DESC \
             LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(clamp_limit(limit))
        .bind(clamp_offset(offset))
        .fetch_all(pool)
        .await
    }
}
