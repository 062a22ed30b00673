//! Handlers for viewer profiles.

use axum::extract::{Path, State};
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_core::profile::{validate_age, validate_phone_number};
use kinoteka_core::types::DbId;
use kinoteka_db::models::user::{UpdateUser, UserResponse};
use kinoteka_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profile
///
/// The caller's own profile.
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let profile = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UserProfile",
            id: user.user_id,
        }))?;
    Ok(Json(DataResponse {
        data: profile.into(),
    }))
}

/// PUT /api/v1/profile
///
/// Update the caller's own profile. Age and phone format are validated;
/// tier changes take effect on the next policy check.
pub async fn update_me(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    validate_age(input.age)?;
    if let Some(ref phone) = input.phone_number {
        validate_phone_number(phone)?;
    }

    let profile = UserRepo::update(&state.pool, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UserProfile",
            id: user.user_id,
        }))?;
    Ok(Json(DataResponse {
        data: profile.into(),
    }))
}

/// GET /api/v1/profiles
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let profiles = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: profiles.into_iter().map(UserResponse::from).collect(),
    }))
}

/// GET /api/v1/profiles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let profile = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UserProfile",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: profile.into(),
    }))
}
