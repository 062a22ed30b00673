//! Handlers for the `/movies/{movie_id}/languages` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_core::types::DbId;
use kinoteka_db::models::language::{CreateMovieLanguage, MovieLanguage, UpdateMovieLanguage};
use kinoteka_db::repositories::{LanguageRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/movies/{movie_id}/languages
pub async fn list_by_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<MovieLanguage>>>> {
    ensure_movie_exists(&state, movie_id).await?;
    let languages = LanguageRepo::list_by_movie(&state.pool, movie_id).await?;
    Ok(Json(DataResponse { data: languages }))
}

/// POST /api/v1/movies/{movie_id}/languages
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(movie_id): Path<DbId>,
    Json(input): Json<CreateMovieLanguage>,
) -> AppResult<(StatusCode, Json<DataResponse<MovieLanguage>>)> {
    ensure_movie_exists(&state, movie_id).await?;
    let language = LanguageRepo::create(&state.pool, movie_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: language })))
}

/// PUT /api/v1/movies/{movie_id}/languages/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((_movie_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateMovieLanguage>,
) -> AppResult<Json<DataResponse<MovieLanguage>>> {
    let language = LanguageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieLanguage",
            id,
        }))?;
    Ok(Json(DataResponse { data: language }))
}

/// DELETE /api/v1/movies/{movie_id}/languages/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((_movie_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = LanguageRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "MovieLanguage",
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
