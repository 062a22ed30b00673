//! Viewing history entity models.

use kinoteka_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `history` table. Append-only access log.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistoryEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: DbId,
    pub viewed_at: Timestamp,
}

/// A history row joined with the movie's name for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistoryWithMovie {
    pub id: DbId,
    pub movie_id: DbId,
    pub movie_name: String,
    pub viewed_at: Timestamp,
}

/// DTO for recording a view.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordView {
    pub movie_id: DbId,
}
