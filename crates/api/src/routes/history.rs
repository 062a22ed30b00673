//! Route definitions for viewing history.

use axum::routing::get;
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

/// Routes mounted at `/history`. Append-only: list and record, nothing
/// else.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(history::list).post(history::record))
}
