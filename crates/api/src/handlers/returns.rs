//! The car-return workflow.
//!
//! Order of operations:
//! 1. Authorization (Operations staff, same branch) -- aborts before any
//!    mutation.
//! 2. Release the car and complete the rental, in one transaction. The
//!    database stamps `actual_return_at`.
//! 3. Run the automatic late-violation upsert. This happens after the
//!    commit; the upsert is idempotent, so a failure here can be retried
//!    without duplicating anything.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use rentworks_core::error::CoreError;
use rentworks_core::types::DbId;
use rentworks_db::models::rental::Rental;
use rentworks_db::models::violation::Violation;
use rentworks_db::repositories::RentalRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::not_found;
use crate::handlers::violations::{authorize_staff_for_rental, upsert_late_violation};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for POST /rentals/{id}/return.
#[derive(Debug, Deserialize)]
pub struct ReturnRequest {
    pub staff_id: DbId,
}

/// Outcome of the return workflow: the completed rental, and the
/// late-return violation when the car came back late.
#[derive(Debug, Serialize)]
pub struct ReturnOutcome {
    pub rental: Rental,
    pub violation: Option<Violation>,
}

/// POST /api/v1/rentals/{id}/return
pub async fn process_return(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReturnRequest>,
) -> AppResult<impl IntoResponse> {
    let rental = RentalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Rental", id))?;

    authorize_staff_for_rental(&state.pool, input.staff_id, &rental).await?;

    let completed = RentalRepo::complete_return(&state.pool, id, input.staff_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "Rental {id} is {}, only open rentals can be returned",
                rental.status
            )))
        })?;

    tracing::info!(
        rental_id = id,
        staff_id = input.staff_id,
        car_plate = %completed.car_plate,
        "Car return processed"
    );

    let violation = upsert_late_violation(&state.pool, &completed, input.staff_id).await?;

    if let Some(v) = &violation {
        tracing::info!(
            rental_id = id,
            code = %v.code,
            hours = v.duration_hours,
            fee = %v.penalty_fee,
            "Late return detected"
        );
    }

    Ok(Json(DataResponse {
        data: ReturnOutcome {
            rental: completed,
            violation,
        },
    }))
}
