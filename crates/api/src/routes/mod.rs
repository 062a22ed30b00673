//! Route tree construction.

pub mod actor;
pub mod auth;
pub mod country;
pub mod director;
pub mod favorite;
pub mod genre;
pub mod health;
pub mod history;
pub mod movie;
pub mod profile;
pub mod rating;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                         register (public)
/// /auth/login                            login (public)
/// /auth/refresh                          refresh (public)
/// /auth/logout                           logout (requires auth)
///
/// /movies                                list (public, ungated), create
/// /movies/{id}                           retrieve (tier-gated), update, delete
/// /movies/{movie_id}/languages[/{id}]    dub tracks
/// /movies/{movie_id}/moments[/{id}]      still images
/// /movies/{movie_id}/ratings             rating thread (flat)
///
/// /ratings                               create rating / reply
/// /ratings/{id}                          delete (author only)
///
/// /countries[/{id}]                      catalog vocabulary
/// /genres[/{id}]
/// /actors[/{id}]                         detail includes credited movies
/// /directors[/{id}]
///
/// /favorites[/{id}]                      caller's collections
/// /favorites/{id}/movies[/{movie_id}]    collection membership
///
/// /history                               caller's view log (append-only)
///
/// /profile                               own profile (get, update)
/// /profiles[/{id}]                       all profiles (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(movie::router())
        .merge(rating::router())
        .nest("/countries", country::router())
        .nest("/genres", genre::router())
        .nest("/actors", actor::router())
        .nest("/directors", director::router())
        .nest("/favorites", favorite::router())
        .nest("/history", history::router())
        .merge(profile::router())
}
