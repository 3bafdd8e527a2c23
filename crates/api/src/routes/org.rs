//! Route definitions for the seeded department and job catalogues.

use axum::routing::get;
use axum::Router;

use crate::handlers::org;
use crate::state::AppState;

/// Catalogue routes mounted at the API root.
///
/// ```text
/// GET /departments -> list_departments
/// GET /jobs        -> list_jobs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/departments", get(org::list_departments))
        .route("/jobs", get(org::list_jobs))
}
