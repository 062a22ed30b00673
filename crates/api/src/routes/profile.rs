//! Route definitions for viewer profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes for `/profile` (own) and `/profiles` (all, requires auth).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile::me).put(profile::update_me))
        .route("/profiles", get(profile::list))
        .route("/profiles/{id}", get(profile::get_by_id))
}
