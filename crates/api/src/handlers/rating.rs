//! Handlers for ratings and their reply threads.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_core::rating::validate_stars;
use kinoteka_core::types::DbId;
use kinoteka_db::models::rating::{CreateRating, Rating};
use kinoteka_db::repositories::{MovieRepo, RatingRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/movies/{movie_id}/ratings
///
/// Flat list, oldest first; `parent_id` keys into the same list for
/// reply threads.
pub async fn list_by_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Rating>>>> {
    MovieRepo::find_by_id(&state.pool, movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;

    let ratings = RatingRepo::list_by_movie(&state.pool, movie_id).await?;
    Ok(Json(DataResponse { data: ratings }))
}

/// POST /api/v1/ratings
///
/// Create a rating, or a reply when `parent_id` is given. Stars must be
/// in [1, 10]; a reply's parent must exist and rate the same movie.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateRating>,
) -> AppResult<(StatusCode, Json<DataResponse<Rating>>)> {
    validate_stars(input.stars)?;

    MovieRepo::find_by_id(&state.pool, input.movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: input.movie_id,
        }))?;

    if let Some(parent_id) = input.parent_id {
        let parent = RatingRepo::find_by_id(&state.pool, parent_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Rating",
                id: parent_id,
            }))?;
        if parent.movie_id != input.movie_id {
            return Err(AppError::Core(CoreError::Validation(
                "Parent rating belongs to a different movie".into(),
            )));
        }
    }

    let rating = RatingRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: rating })))
}

/// DELETE /api/v1/ratings/{id}
///
/// Only the author may delete; replies cascade.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let rating = RatingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Rating",
            id,
        }))?;

    if rating.user_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Rating belongs to another viewer".into(),
        )));
    }

    RatingRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
