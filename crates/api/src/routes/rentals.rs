//! Route definitions for the rental lifecycle, lateness queries, the
//! return-processing workflow, and receipts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{receipts, rentals, returns, violations};
use crate::state::AppState;

/// Rental routes mounted at `/rentals`.
///
/// ```text
/// GET  /                       -> list (?status, ?renter_id)
/// POST /                       -> book
/// GET  /overdue                -> list_overdue
/// GET  /{id}                   -> get_by_id (with derived lateness)
/// POST /{id}/pickup            -> pickup
/// POST /{id}/cancel            -> cancel
/// POST /{id}/return            -> process_return
/// GET  /{id}/late-status       -> late_status
/// GET  /{id}/receipt           -> rental_receipt (text/plain)
/// GET  /{id}/late-receipt      -> late_return_receipt (text/plain)
/// GET  /{id}/violations        -> list_for_rental
/// POST /{id}/violations/late   -> record_late_violation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rentals::list).post(rentals::book))
        .route("/overdue", get(rentals::list_overdue))
        .route("/{id}", get(rentals::get_by_id))
        .route("/{id}/pickup", post(rentals::pickup))
        .route("/{id}/cancel", post(rentals::cancel))
        .route("/{id}/return", post(returns::process_return))
        .route("/{id}/late-status", get(rentals::late_status))
        .route("/{id}/receipt", get(receipts::rental_receipt))
        .route("/{id}/late-receipt", get(receipts::late_return_receipt))
        .route("/{id}/violations", get(violations::list_for_rental))
        .route(
            "/{id}/violations/late",
            post(violations::record_late_violation),
        )
}
