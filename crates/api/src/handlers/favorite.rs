//! Handlers for a viewer's favorite collections.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_core::types::DbId;
use kinoteka_db::models::favorite::{AddFavoriteMovie, CreateFavorite, Favorite, FavoriteDetail};
use kinoteka_db::repositories::{FavoriteRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/favorites
///
/// The caller's collections, each with its movies.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<FavoriteDetail>>>> {
    let favorites = FavoriteRepo::list_by_user(&state.pool, user.user_id).await?;

    let mut details = Vec::with_capacity(favorites.len());
    for favorite in favorites {
        let movies = FavoriteRepo::movies_for(&state.pool, favorite.id).await?;
        details.push(FavoriteDetail { favorite, movies });
    }

    Ok(Json(DataResponse { data: details }))
}

/// POST /api/v1/favorites
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateFavorite>,
) -> AppResult<(StatusCode, Json<DataResponse<Favorite>>)> {
    let favorite = FavoriteRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: favorite })))
}

/// GET /api/v1/favorites/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FavoriteDetail>>> {
    let favorite = owned_favorite(&state, &user, id).await?;
    let movies = FavoriteRepo::movies_for(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: FavoriteDetail { favorite, movies },
    }))
}

/// DELETE /api/v1/favorites/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    owned_favorite(&state, &user, id).await?;
    FavoriteRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/favorites/{id}/movies
pub async fn add_movie(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<AddFavoriteMovie>,
) -> AppResult<StatusCode> {
    owned_favorite(&state, &user, id).await?;

    MovieRepo::find_by_id(&state.pool, input.movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: input.movie_id,
        }))?;

    FavoriteRepo::add_movie(&state.pool, id, input.movie_id).await?;
    Ok(StatusCode::CREATED)
}

/// DELETE /api/v1/favorites/{id}/movies/{movie_id}
pub async fn remove_movie(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, movie_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    owned_favorite(&state, &user, id).await?;

    let removed = FavoriteRepo::remove_movie(&state.pool, id, movie_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "FavoriteMovie",
            id: movie_id,
        }))
    }
}

/// Fetch a favorite and verify it belongs to the caller.
async fn owned_favorite(
    state: &AppState,
    user: &AuthUser,
    id: DbId,
) -> Result<Favorite, AppError> {
    let favorite = FavoriteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Favorite",
            id,
        }))?;

    if favorite.user_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Favorite belongs to another viewer".into(),
        )));
    }

    Ok(favorite)
}
