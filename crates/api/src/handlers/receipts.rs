//! Receipt endpoints: plain-text rental and late-return receipts.
//!
//! The repositories assemble the joined data; rendering itself is pure
//! and lives in `rentworks_core::receipt`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use chrono::Utc;

use rentworks_core::receipt::{
    render_late_return_receipt, render_rental_receipt, ReceiptViolation, RentalReceipt,
};
use rentworks_core::rental::{RentalStatus, RentalTiming};
use rentworks_core::types::DbId;
use rentworks_db::models::rental::RentalReceiptRow;
use rentworks_db::models::violation::Violation;
use rentworks_db::repositories::{RentalRepo, ViolationRepo};

use crate::error::AppResult;
use crate::handlers::not_found;
use crate::state::AppState;

/// GET /api/v1/rentals/{id}/receipt
///
/// Full rental receipt as `text/plain`: identity, car, lifecycle
/// timestamps, staff, base payment, itemized violations, grand total.
pub async fn rental_receipt(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = RentalRepo::receipt_data(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Rental", id))?;
    let violations = ViolationRepo::list_by_rental(&state.pool, id).await?;

    Ok(render_rental_receipt(&to_receipt(row, violations)))
}

/// GET /api/v1/rentals/{id}/late-receipt
///
/// Penalty breakdown as `text/plain`; an informational message when the
/// rental is not late.
pub async fn late_return_receipt(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rental = RentalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Rental", id))?;

    let hours = rental.timing().late_hours(Utc::now());

    Ok(render_late_return_receipt(
        rental.id,
        Some(rental.expected_return_at),
        hours,
    ))
}

/// Map the joined receipt row and violation list into the core receipt
/// value struct.
fn to_receipt(row: RentalReceiptRow, violations: Vec<Violation>) -> RentalReceipt {
    let timing = RentalTiming {
        status: RentalStatus::parse_or_default(&row.status),
        expected_return_at: Some(row.expected_return_at),
        actual_return_at: row.actual_return_at,
    };

    RentalReceipt {
        rental_id: row.rental_id,
        renter_name: row.renter_name,
        renter_phone: row.renter_phone,
        renter_email: row.renter_email,
        car_label: format!("{} {}", row.car_make, row.car_model),
        car_plate: row.car_plate,
        daily_rate: row.daily_rate,
        created_at: row.created_at,
        actual_pickup_at: row.actual_pickup_at,
        expected_return_at: Some(row.expected_return_at),
        actual_return_at: row.actual_return_at,
        pickup_staff: row.pickup_staff_name,
        return_staff: row.return_staff_name,
        status_label: timing.effective_status(Utc::now()).to_string(),
        total_payment: row.total_payment,
        violations: violations
            .into_iter()
            .map(|v| ReceiptViolation {
                code: v.code,
                category: v.category,
                recorded_at: v.recorded_at,
                reason: v.reason,
                duration_hours: v.duration_hours,
                fee: v.penalty_fee,
            })
            .collect(),
    }
}
