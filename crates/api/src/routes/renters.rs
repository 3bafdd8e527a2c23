//! Route definitions for renter management.

use axum::routing::get;
use axum::Router;

use crate::handlers::renters;
use crate::state::AppState;

/// Renter routes mounted at `/renters`.
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
        .route("/", get(renters::list).post(renters::create))
        .route(
            "/{id}",
            get(renters::get_by_id)
                .put(renters::update)
                .delete(renters::delete),
        )
}
