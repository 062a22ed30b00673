//! Handlers for the `/movies/{movie_id}/moments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_core::types::DbId;
use kinoteka_db::models::moment::{CreateMoment, Moment};
use kinoteka_db::repositories::{MomentRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/movies/{movie_id}/moments
pub async fn list_by_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Moment>>>> {
    ensure_movie_exists(&state, movie_id).await?;
    let moments = MomentRepo::list_by_movie(&state.pool, movie_id).await?;
    Ok(Json(DataResponse { data: moments }))
}

/// POST /api/v1/movies/{movie_id}/moments
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(movie_id): Path<DbId>,
    Json(input): Json<CreateMoment>,
) -> AppResult<(StatusCode, Json<DataResponse<Moment>>)> {
    ensure_movie_exists(&state, movie_id).await?;
    let moment = MomentRepo::create(&state.pool, movie_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: moment })))
}

/// DELETE /api/v1/movies/{movie_id}/moments/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((_movie_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = MomentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Moment",
            id,
        }))
    }
}

async fn ensure_movie_exists(state: &AppState, movie_id: DbId) -> Result<(), AppError> {
    MovieRepo::find_by_id(&state.pool, movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;
    Ok(())
}
