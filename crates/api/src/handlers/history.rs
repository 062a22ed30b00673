//! Handlers for the `/history` resource.
//!
//! Viewing history is an append-only access log: entries are recorded and
//! listed, never edited or removed.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_db::models::history::{HistoryEntry, HistoryWithMovie, RecordView};
use kinoteka_db::repositories::{HistoryRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/history
///
/// The caller's viewing history, most recent first.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<HistoryWithMovie>>>> {
    let entries =
        HistoryRepo::list_by_user(&state.pool, user.user_id, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/history
///
/// Record that the caller watched a movie.
pub async fn record(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<RecordView>,
) -> AppResult<(StatusCode, Json<DataResponse<HistoryEntry>>)> {
    MovieRepo::find_by_id(&state.pool, input.movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: input.movie_id,
        }))?;

    let entry = HistoryRepo::record(&state.pool, user.user_id, input.movie_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}
