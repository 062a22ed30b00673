//! Handlers for the `/actors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_core::types::DbId;
use kinoteka_db::models::person::{CreatePerson, Person, PersonDetail, UpdatePerson};
use kinoteka_db::repositories::ActorRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/actors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Person>>>> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: actors }))
}

/// GET /api/v1/actors/{id}
///
/// Detail includes the movies the actor is credited in.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PersonDetail>>> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }))?;
    let movies = ActorRepo::movies_for(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: PersonDetail {
            person: actor,
            movies,
        },
    }))
}

/// POST /api/v1/actors
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreatePerson>,
) -> AppResult<(StatusCode, Json<DataResponse<Person>>)> {
    let actor = ActorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: actor })))
}

/// PUT /api/v1/actors/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePerson>,
) -> AppResult<Json<DataResponse<Person>>> {
    let actor = ActorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }))?;
    Ok(Json(DataResponse { data: actor }))
}

/// DELETE /api/v1/actors/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ActorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }))
    }
}
