//! Route definitions for favorite collections.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// Routes mounted at `/favorites`.
///
/// ```text
/// GET    /                      -> list own collections
/// POST   /                      -> create collection
/// GET    /{id}                  -> collection with movies
/// DELETE /{id}                  -> delete collection
/// POST   /{id}/movies           -> add movie
/// DELETE /{id}/movies/{movie_id}-> remove movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(favorite::list).post(favorite::create))
        .route(
            "/{id}",
            get(favorite::get_by_id).delete(favorite::delete),
        )
        .route("/{id}/movies", post(favorite::add_movie))
        .route(
            "/{id}/movies/{movie_id}",
            delete(favorite::remove_movie),
        )
}
