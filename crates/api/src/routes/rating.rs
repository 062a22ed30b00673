//! Route definitions for rating creation and deletion.
//!
//! Listing lives under `/movies/{movie_id}/ratings` (see
//! [`crate::routes::movie`]).

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::rating;
use crate::state::AppState;

/// Routes mounted at `/ratings`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ratings", post(rating::create))
        .route("/ratings/{id}", delete(rating::delete))
}
