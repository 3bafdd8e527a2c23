pub mod branches;
pub mod cars;
pub mod health;
pub mod org;
pub mod rentals;
pub mod renters;
pub mod staff;
pub mod violations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /branches                        list, create
/// /branches/{id}                   get, update, delete
///
/// /departments                     list (seeded catalogue)
/// /jobs                            list (seeded catalogue)
///
/// /staff                           list (?branch_id), create
/// /staff/{id}                      get, update, delete
///
/// /renters                         list, create
/// /renters/{id}                    get, update, delete
///
/// /cars                            list (?branch_id, ?status), create
/// /cars/{plate}                    get, update, delete
/// /cars/{plate}/status             set status (PUT)
///
/// /rentals                         list (?status, ?renter_id), book (POST)
/// /rentals/overdue                 active rentals past expected return
/// /rentals/{id}                    get (with derived lateness)
/// /rentals/{id}/pickup             upcoming -> active (POST)
/// /rentals/{id}/cancel             open -> cancelled, frees car (POST)
/// /rentals/{id}/return             return workflow (POST)
/// /rentals/{id}/late-status        lateness + projected penalty (GET)
/// /rentals/{id}/receipt            full receipt, text/plain (GET)
/// /rentals/{id}/late-receipt       penalty breakdown, text/plain (GET)
/// /rentals/{id}/violations         list rental's violations (GET)
/// /rentals/{id}/violations/late    upsert automatic late violation (POST)
///
/// /violations                      list, create
/// /violations/{code}               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/branches", branches::router())
        .merge(org::router())
        .nest("/staff", staff::router())
        .nest("/renters", renters::router())
        .nest("/cars", cars::router())
        .nest("/rentals", rentals::router())
        .nest("/violations", violations::router())
}
