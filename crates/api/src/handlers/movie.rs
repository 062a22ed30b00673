//! Handlers for the `/movies` resource: the catalog query service.
//!
//! Listing applies NO tier gate -- every movie is summarized for every
//! caller, anonymous ones included. Detail retrieval is where access is
//! enforced, via the policy evaluator, so a simple-tier viewer can see
//! that a pro movie exists but cannot open it.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kinoteka_core::error::CoreError;
use kinoteka_core::policy::{authorize_detail, ViewerContext};
use kinoteka_core::rating::average_rating;
use kinoteka_core::relations::{first_credit, first_name, join_names};
use kinoteka_core::tier::{validate_resolutions, Tier};
use kinoteka_core::types::{DbId, Timestamp};
use kinoteka_db::models::language::MovieLanguage;
use kinoteka_db::models::moment::Moment;
use kinoteka_db::models::movie::{
    CreateMovie, Movie, MovieFilter, MovieOrdering, MovieWithRating, UpdateMovie,
};
use kinoteka_db::models::rating::Rating;
use kinoteka_db::repositories::{
    LanguageRepo, MomentRepo, MovieRepo, RatingRepo, UserRepo,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /movies`.
///
/// Relation filters match by foreign key; all predicates combine with AND.
#[derive(Debug, Deserialize)]
pub struct MovieListParams {
    pub year_gt: Option<i32>,
    pub year_lt: Option<i32>,
    pub genre: Option<DbId>,
    pub country: Option<DbId>,
    pub actor: Option<DbId>,
    pub director: Option<DbId>,
    /// Exact tier: `simple` or `pro`.
    pub status: Option<String>,
    /// Substring match against the movie name.
    pub search: Option<String>,
    /// `year` for ascending, `-year` for descending.
    pub ordering: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Browse-view movie summary: all related country and genre names joined
/// into single comma-separated strings.
#[derive(Debug, Serialize)]
pub struct MovieSummary {
    pub id: DbId,
    pub name: String,
    pub year: i32,
    pub countries: String,
    pub genres: String,
    pub trailer_path: Option<String>,
    pub average_rating: f64,
}

/// Full detail view. Relation fields carry only the first related record
/// (`null` when the relation is empty), the headline-credit rendering.
#[derive(Debug, Serialize)]
pub struct MovieDetail {
    pub id: DbId,
    pub name: String,
    pub year: i32,
    pub runtime_minutes: Option<i32>,
    pub description: String,
    pub trailer_path: Option<String>,
    pub image_path: Option<String>,
    pub status: String,
    pub resolutions: Vec<String>,
    pub country: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub actor: Option<String>,
    pub average_rating: f64,
    pub languages: Vec<MovieLanguage>,
    pub moments: Vec<Moment>,
    pub ratings: Vec<Rating>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/movies
///
/// List movie summaries matching the given filters. Anonymous callers are
/// served; no tier filter is applied here (detail access is enforced in
/// [`retrieve`]).
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<DataResponse<Vec<MovieSummary>>>> {
    let filter = build_filter(&params)?;
    let movies = MovieRepo::list(&state.pool, &filter).await?;

    let mut summaries = Vec::with_capacity(movies.len());
    for movie in movies {
        summaries.push(build_summary(&state, movie).await?);
    }

    Ok(Json(DataResponse { data: summaries }))
}

/// GET /api/v1/movies/{id}
///
/// Retrieve full movie detail. 404 if the movie does not exist; 401/403
/// if it exists but the viewer's authentication state or tier denies it.
pub async fn retrieve(
    State(state): State<AppState>,
    maybe_user: MaybeAuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MovieDetail>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;

    let viewer = viewer_context(&state, maybe_user.0.as_ref()).await?;
    let movie_tier: Tier = movie.status.parse()?;
    authorize_detail(viewer, movie_tier)?;

    let detail = build_detail(&state, movie).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<DataResponse<Movie>>)> {
    validate_resolutions(&input.resolutions)?;
    let movie = MovieRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: movie })))
}

/// PUT /api/v1/movies/{id}
///
/// The tier gate applies here too: editing a pro movie requires the same
/// access as viewing it.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<DataResponse<Movie>>> {
    if let Some(ref resolutions) = input.resolutions {
        validate_resolutions(resolutions)?;
    }
    authorize_existing(&state, &user, id).await?;

    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /api/v1/movies/{id}
///
/// Cascades to languages, moments, ratings, favorite entries, and history
/// entries.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    authorize_existing(&state, &user, id).await?;

    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Composition helpers
// ---------------------------------------------------------------------------

/// Resolve the policy input for the current caller.
///
/// The tier is re-read from the profile row rather than trusted from the
/// token, so a promotion to pro takes effect on the next request.
pub(crate) async fn viewer_context(
    state: &AppState,
    auth: Option<&AuthUser>,
) -> Result<ViewerContext, AppError> {
    let Some(auth) = auth else {
        return Ok(ViewerContext::anonymous());
    };

    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Account is no longer active".into()))
        })?;

    let tier: Tier = user.status.parse()?;
    Ok(ViewerContext::authenticated(tier))
}

/// Run the detail-access gate against an existing movie.
async fn authorize_existing(state: &AppState, user: &AuthUser, id: DbId) -> Result<(), AppError> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    let viewer = viewer_context(state, Some(user)).await?;
    let movie_tier: Tier = movie.status.parse()?;
    authorize_detail(viewer, movie_tier)?;
    Ok(())
}

fn build_filter(params: &MovieListParams) -> Result<MovieFilter, AppError> {
    let status = match params.status.as_deref() {
        Some(s) => Some(s.parse::<Tier>()?),
        None => None,
    };
    let ordering = match params.ordering.as_deref() {
        Some(o) => MovieOrdering::parse(o)?,
        None => MovieOrdering::Unspecified,
    };

    Ok(MovieFilter {
        year_gt: params.year_gt,
        year_lt: params.year_lt,
        genre_id: params.genre,
        country_id: params.country,
        actor_id: params.actor,
        director_id: params.director,
        status,
        search: params.search.clone(),
        ordering,
        limit: params.limit,
        offset: params.offset,
    })
}

/// Assemble a list-mode summary: every country and genre name joined.
async fn build_summary(
    state: &AppState,
    movie: MovieWithRating,
) -> Result<MovieSummary, AppError> {
    let countries = MovieRepo::country_names(&state.pool, movie.id).await?;
    let genres = MovieRepo::genre_names(&state.pool, movie.id).await?;

    Ok(MovieSummary {
        id: movie.id,
        name: movie.name,
        year: movie.year,
        countries: join_names(&countries),
        genres: join_names(&genres),
        trailer_path: movie.trailer_path,
        average_rating: movie.average_rating,
    })
}

/// Assemble a detail view: first-only relation summaries, the recomputed
/// average rating, and the movie's media and rating thread.
async fn build_detail(state: &AppState, movie: Movie) -> Result<MovieDetail, AppError> {
    let countries = MovieRepo::country_names(&state.pool, movie.id).await?;
    let genres = MovieRepo::genre_names(&state.pool, movie.id).await?;
    let directors = MovieRepo::director_credits(&state.pool, movie.id).await?;
    let actors = MovieRepo::actor_credits(&state.pool, movie.id).await?;
    let languages = LanguageRepo::list_by_movie(&state.pool, movie.id).await?;
    let moments = MomentRepo::list_by_movie(&state.pool, movie.id).await?;
    let ratings = RatingRepo::list_by_movie(&state.pool, movie.id).await?;

    let stars: Vec<i32> = ratings.iter().map(|r| r.stars).collect();

    Ok(MovieDetail {
        id: movie.id,
        name: movie.name,
        year: movie.year,
        runtime_minutes: movie.runtime_minutes,
        description: movie.description,
        trailer_path: movie.trailer_path,
        image_path: movie.image_path,
        status: movie.status,
        resolutions: movie.resolutions,
        country: first_name(&countries).map(str::to_string),
        genre: first_name(&genres).map(str::to_string),
        director: first_credit(&directors),
        actor: first_credit(&actors),
        average_rating: average_rating(&stars),
        languages,
        moments,
        ratings,
        created_at: movie.created_at,
        updated_at: movie.updated_at,
    })
}
