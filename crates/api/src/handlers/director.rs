//! Handlers for the `/directors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_core::types::DbId;
use kinoteka_db::models::person::{CreatePerson, Person, PersonDetail, UpdatePerson};
use kinoteka_db::repositories::DirectorRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/directors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Person>>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: directors }))
}

/// GET /api/v1/directors/{id}
///
/// Detail includes the movies the director is credited on.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PersonDetail>>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    let movies = DirectorRepo::movies_for(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: PersonDetail {
            person: director,
            movies,
        },
    }))
}

/// POST /api/v1/directors
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreatePerson>,
) -> AppResult<(StatusCode, Json<DataResponse<Person>>)> {
    let director = DirectorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: director })))
}

/// PUT /api/v1/directors/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePerson>,
) -> AppResult<Json<DataResponse<Person>>> {
    let director = DirectorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    Ok(Json(DataResponse { data: director }))
}

/// DELETE /api/v1/directors/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DirectorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))
    }
}
