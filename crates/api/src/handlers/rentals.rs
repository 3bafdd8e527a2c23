//! Handlers for the rental lifecycle: booking, pickup, cancellation,
//! listings, and lateness queries.
//!
//! Return processing lives in `handlers::returns`; it composes the
//! authorization check, the transactional completion, and the automatic
//! late-violation upsert.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rentworks_core::error::CoreError;
use rentworks_core::penalty::late_penalty;
use rentworks_core::rental::RentalStatus;
use rentworks_core::types::DbId;
use rentworks_db::models::rental::{CreateRental, Rental};
use rentworks_db::repositories::{CarRepo, RentalRepo, RenterRepo, StaffRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::not_found;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for rental listings.
#[derive(Debug, Deserialize)]
pub struct RentalListParams {
    pub status: Option<String>,
    pub renter_id: Option<DbId>,
}

/// Request body for POST /rentals/{id}/pickup.
#[derive(Debug, Deserialize)]
pub struct PickupRequest {
    pub staff_id: DbId,
}

/// A rental together with its derived lateness view.
///
/// `effective_status` differs from the stored status only for Active
/// rentals past their expected return, which surface as `overdue`.
#[derive(Debug, Serialize)]
pub struct RentalView {
    #[serde(flatten)]
    pub rental: Rental,
    pub effective_status: String,
    pub is_late: bool,
    pub late_hours: i64,
}

impl RentalView {
    fn derive(rental: Rental) -> Self {
        let now = Utc::now();
        let timing = rental.timing();
        Self {
            effective_status: timing.effective_status(now).to_string(),
            is_late: timing.is_late(now),
            late_hours: timing.late_hours(now),
            rental,
        }
    }
}

/// POST /api/v1/rentals
///
/// Book a rental. The car is put on hold (`rented`) and the rental row
/// inserted in one transaction; the rental's branch is the car's branch.
pub async fn book(
    State(state): State<AppState>,
    Json(input): Json<CreateRental>,
) -> AppResult<impl IntoResponse> {
    if input.expected_return_at <= input.expected_pickup_at {
        return Err(AppError::BadRequest(
            "expected_return_at must be after expected_pickup_at".to_string(),
        ));
    }
    if input.total_payment < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "total_payment must not be negative".to_string(),
        ));
    }

    RenterRepo::find_by_id(&state.pool, input.renter_id)
        .await?
        .ok_or_else(|| not_found("Renter", input.renter_id))?;
    let car = CarRepo::find_by_plate(&state.pool, &input.car_plate)
        .await?
        .ok_or_else(|| not_found("Car", &input.car_plate))?;

    let rental = RentalRepo::book(&state.pool, &input).await?.ok_or_else(|| {
        AppError::Core(CoreError::Conflict(format!(
            "Car {} is not available (status: {})",
            input.car_plate,
            car.parsed_status().as_str()
        )))
    })?;

    tracing::info!(
        rental_id = rental.id,
        renter_id = rental.renter_id,
        car_plate = %rental.car_plate,
        branch_id = rental.branch_id,
        "Rental booked"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: rental })))
}

/// GET /api/v1/rentals
///
/// Supports optional `status` (stored status, not the derived overdue
/// view) and `renter_id` filters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RentalListParams>,
) -> AppResult<impl IntoResponse> {
    let status = params
        .status
        .as_deref()
        .map(|raw| {
            RentalStatus::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown rental status '{raw}'")))
        })
        .transpose()?;

    let rentals = RentalRepo::list(&state.pool, status, params.renter_id).await?;
    let views: Vec<RentalView> = rentals.into_iter().map(RentalView::derive).collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/rentals/overdue
///
/// Active rentals whose expected return time has passed. Pull-based:
/// reflects reality only at the moment of the call.
pub async fn list_overdue(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rentals = RentalRepo::list_overdue(&state.pool).await?;
    let views: Vec<RentalView> = rentals.into_iter().map(RentalView::derive).collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/rentals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rental = RentalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Rental", id))?;
    Ok(Json(DataResponse {
        data: RentalView::derive(rental),
    }))
}

/// POST /api/v1/rentals/{id}/pickup
///
/// Move an upcoming rental to active, stamping the pickup time and staff.
pub async fn pickup(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PickupRequest>,
) -> AppResult<impl IntoResponse> {
    let rental = RentalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Rental", id))?;
    StaffRepo::find_by_id(&state.pool, input.staff_id)
        .await?
        .ok_or_else(|| not_found("Staff", input.staff_id))?;

    let updated = RentalRepo::mark_picked_up(&state.pool, id, input.staff_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "Rental {id} is {}, only upcoming rentals can be picked up",
                rental.status
            )))
        })?;

    tracing::info!(rental_id = id, staff_id = input.staff_id, "Rental picked up");

    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/rentals/{id}/cancel
///
/// Cancel an open rental and release its car.
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rental = RentalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Rental", id))?;

    let cancelled = RentalRepo::cancel(&state.pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::Conflict(format!(
            "Rental {id} is already {}",
            rental.status
        )))
    })?;

    tracing::info!(rental_id = id, car_plate = %cancelled.car_plate, "Rental cancelled");

    Ok(Json(DataResponse { data: cancelled }))
}

/// Lateness summary for one rental.
#[derive(Debug, Serialize)]
pub struct LateStatus {
    pub is_late: bool,
    pub late_hours: i64,
    /// What the late fee would be if settled right now; for returned
    /// rentals this is the final figure.
    pub projected_penalty: Decimal,
}

/// GET /api/v1/rentals/{id}/late-status
///
/// Penalty preview: uses the actual return when one is recorded, else
/// projects from the current time for open rentals.
pub async fn late_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rental = RentalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Rental", id))?;

    let now = Utc::now();
    let timing = rental.timing();
    let late_hours = timing.late_hours(now);

    Ok(Json(DataResponse {
        data: LateStatus {
            is_late: timing.is_late(now),
            late_hours,
            projected_penalty: late_penalty(late_hours),
        },
    }))
}
