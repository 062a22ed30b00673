//! Route definitions for movies and their nested resources.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{language, moment, movie, rating};
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                                  -> list (public, ungated)
/// POST   /                                  -> create
/// GET    /{id}                              -> retrieve (tier-gated)
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /{movie_id}/languages              -> dub tracks
/// POST   /{movie_id}/languages              -> add dub track
/// PUT    /{movie_id}/languages/{id}         -> update dub track
/// DELETE /{movie_id}/languages/{id}         -> remove dub track
/// GET    /{movie_id}/moments                -> still images
/// POST   /{movie_id}/moments                -> add still image
/// DELETE /{movie_id}/moments/{id}           -> remove still image
/// GET    /{movie_id}/ratings                -> rating thread (flat)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movie::list).post(movie::create))
        .route(
            "/movies/{id}",
            get(movie::retrieve)
                .put(movie::update)
                .delete(movie::delete),
        )
        .route(
            "/movies/{movie_id}/languages",
            get(language::list_by_movie).post(language::create),
        )
        .route(
            "/movies/{movie_id}/languages/{id}",
            put(language::update).delete(language::delete),
        )
        .route(
            "/movies/{movie_id}/moments",
            get(moment::list_by_movie).post(moment::create),
        )
        .route("/movies/{movie_id}/moments/{id}", delete(moment::delete))
        .route("/movies/{movie_id}/ratings", get(rating::list_by_movie))
}
