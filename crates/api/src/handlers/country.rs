//! Handlers for the `/countries` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_core::types::DbId;
use kinoteka_db::models::country::{Country, CreateCountry, UpdateCountry};
use kinoteka_db::repositories::CountryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/countries
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Country>>>> {
    let countries = CountryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: countries }))
}

/// GET /api/v1/countries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Country>>> {
    let country = CountryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))?;
    Ok(Json(DataResponse { data: country }))
}

/// POST /api/v1/countries
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateCountry>,
) -> AppResult<(StatusCode, Json<DataResponse<Country>>)> {
    let country = CountryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: country })))
}

/// PUT /api/v1/countries/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCountry>,
) -> AppResult<Json<DataResponse<Country>>> {
    let country = CountryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))?;
    Ok(Json(DataResponse { data: country }))
}

/// DELETE /api/v1/countries/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CountryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))
    }
}
