//! Route definitions for fleet (car) management.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::cars;
use crate::state::AppState;

/// Car routes mounted at `/cars`. Cars are addressed by plate number.
///
/// ```text
/// GET    /                 -> list (?branch_id, ?status)
/// POST   /                 -> create
/// GET    /{plate}          -> get_by_plate
/// PUT    /{plate}          -> update
/// DELETE /{plate}          -> delete
/// PUT    /{plate}/status   -> set_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cars::list).post(cars::create))
        .route(
            "/{plate}",
            get(cars::get_by_plate)
                .put(cars::update)
                .delete(cars::delete),
        )
        .route("/{plate}/status", put(cars::set_status))
}
