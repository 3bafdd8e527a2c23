//! Handlers for violation management and the automatic late-return
//! violation engine.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use rentworks_core::authorization::ensure_can_process_rental;
use rentworks_core::error::CoreError;
use rentworks_core::penalty::late_penalty;
use rentworks_core::types::DbId;
use rentworks_core::violation::{
    late_return_reason, next_code, validate_category, CATEGORY_LATE_RETURN,
};
use rentworks_db::models::rental::Rental;
use rentworks_db::models::violation::{CreateViolation, UpdateViolation, Violation};
use rentworks_db::repositories::{RentalRepo, StaffRepo, ViolationRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::not_found;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for POST /rentals/{id}/violations/late.
#[derive(Debug, Deserialize)]
pub struct LateViolationRequest {
    pub staff_id: DbId,
}

/// Resolve the acting staff and check they may act on `rental`.
///
/// Shared by return processing and violation recording: the staff must
/// exist, sit in the Operations department, and belong to the rental's
/// branch.
pub async fn authorize_staff_for_rental(
    pool: &PgPool,
    staff_id: DbId,
    rental: &Rental,
) -> Result<(), AppError> {
    let staff = StaffRepo::authorization_context(pool, staff_id)
        .await?
        .ok_or_else(|| not_found("Staff", staff_id))?;
    ensure_can_process_rental(&staff, rental.branch_id).map_err(AppError::Core)
}

/// Create or refresh the automatic late-return violation for `rental`.
///
/// Returns `None` (and writes nothing) when the rental is not late or the
/// computed penalty is zero. Otherwise the rental's existing late-return
/// violation is refreshed in place, or a new one is inserted under the
/// next sequential code. Idempotent: calling twice leaves a single row.
pub async fn upsert_late_violation(
    pool: &PgPool,
    rental: &Rental,
    staff_id: DbId,
) -> Result<Option<Violation>, AppError> {
    let hours = rental.timing().late_hours(Utc::now());
    if hours <= 0 {
        return Ok(None);
    }
    let fee = late_penalty(hours);
    if fee <= Decimal::ZERO {
        return Ok(None);
    }

    let reason = late_return_reason(hours, rental.expected_return_at);

    if let Some(existing) = ViolationRepo::find_late_return_for_rental(pool, rental.id).await? {
        let refreshed =
            ViolationRepo::refresh_late_return(pool, &existing.code, fee, hours, &reason)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Late-return violation {} vanished during refresh",
                        existing.code
                    ))
                })?;
        return Ok(Some(refreshed));
    }

    let code = next_code(ViolationRepo::max_code(pool).await?.as_deref());
    let input = CreateViolation {
        rental_id: rental.id,
        staff_id,
        category: CATEGORY_LATE_RETURN.to_string(),
        penalty_fee: fee,
        reason,
        duration_hours: hours,
    };
    let violation = ViolationRepo::create(pool, &code, &input).await?;
    Ok(Some(violation))
}

/// POST /api/v1/rentals/{id}/violations/late
///
/// Run the automatic late-violation detection for one rental. Responds
/// 204 when the rental is not late (nothing recorded), 200 with the
/// created or refreshed violation otherwise.
pub async fn record_late_violation(
    State(state): State<AppState>,
    Path(rental_id): Path<DbId>,
    Json(input): Json<LateViolationRequest>,
) -> AppResult<impl IntoResponse> {
    let rental = RentalRepo::find_by_id(&state.pool, rental_id)
        .await?
        .ok_or_else(|| not_found("Rental", rental_id))?;

    authorize_staff_for_rental(&state.pool, input.staff_id, &rental).await?;

    match upsert_late_violation(&state.pool, &rental, input.staff_id).await? {
        Some(violation) => {
            tracing::info!(
                rental_id,
                code = %violation.code,
                hours = violation.duration_hours,
                fee = %violation.penalty_fee,
                "Late-return violation recorded"
            );
            Ok(Json(DataResponse { data: violation }).into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// POST /api/v1/violations
///
/// Record a manual violation (damage, traffic, cleaning, ...). The code
/// is allocated by the engine; the acting staff must pass the
/// authorization check for the rental's branch.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateViolation>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_category(&input.category).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    if input.penalty_fee < Decimal::ZERO {
        return Err(AppError::Core(CoreError::Validation(
            "penalty_fee must not be negative".to_string(),
        )));
    }

    let rental = RentalRepo::find_by_id(&state.pool, input.rental_id)
        .await?
        .ok_or_else(|| not_found("Rental", input.rental_id))?;

    authorize_staff_for_rental(&state.pool, input.staff_id, &rental).await?;

    let code = next_code(ViolationRepo::max_code(&state.pool).await?.as_deref());
    let violation = ViolationRepo::create(&state.pool, &code, &input).await?;

    tracing::info!(
        code = %violation.code,
        rental_id = violation.rental_id,
        category = %violation.category,
        fee = %violation.penalty_fee,
        "Violation recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: violation })))
}

/// GET /api/v1/violations
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let violations = ViolationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: violations }))
}

/// GET /api/v1/rentals/{id}/violations
pub async fn list_for_rental(
    State(state): State<AppState>,
    Path(rental_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    RentalRepo::find_by_id(&state.pool, rental_id)
        .await?
        .ok_or_else(|| not_found("Rental", rental_id))?;

    let violations = ViolationRepo::list_by_rental(&state.pool, rental_id).await?;
    Ok(Json(DataResponse { data: violations }))
}

/// GET /api/v1/violations/{code}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let violation = ViolationRepo::find_by_code(&state.pool, &code)
        .await?
        .ok_or_else(|| not_found("Violation", &code))?;
    Ok(Json(DataResponse { data: violation }))
}

/// PUT /api/v1/violations/{code}
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(input): Json<UpdateViolation>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(category) = &input.category {
        validate_category(category).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }
    if matches!(input.penalty_fee, Some(fee) if fee < Decimal::ZERO) {
        return Err(AppError::Core(CoreError::Validation(
            "penalty_fee must not be negative".to_string(),
        )));
    }

    let violation = ViolationRepo::update(&state.pool, &code, &input)
        .await?
        .ok_or_else(|| not_found("Violation", &code))?;

    tracing::info!(code = %code, "Violation updated");

    Ok(Json(DataResponse { data: violation }))
}

/// DELETE /api/v1/violations/{code}
pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = ViolationRepo::delete(&state.pool, &code).await?;
    if !deleted {
        return Err(not_found("Violation", &code));
    }

    tracing::info!(code = %code, "Violation deleted");

    Ok(StatusCode::NO_CONTENT)
}
