//! Route definitions for branch management.

use axum::routing::get;
use axum::Router;

use crate::handlers::branches;
use crate::state::AppState;

/// Branch routes mounted at `/branches`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(branches::list).post(branches::create))
        .route(
            "/{id}",
            get(branches::get_by_id)
                .put(branches::update)
                .delete(branches::delete),
        )
}
