//! Route definitions for violation management.

use axum::routing::get;
use axum::Router;

use crate::handlers::violations;
use crate::state::AppState;

/// Violation routes mounted at `/violations`. Violations are addressed by
/// their sequential code (`VLN001`, ...).
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{code}    -> get_by_code
/// PUT    /{code}    -> update
/// DELETE /{code}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(violations::list).post(violations::create))
        .route(
            "/{code}",
            get(violations::get_by_code)
                .put(violations::update)
                .delete(violations::delete),
        )
}
