//! Handlers for fleet (car) management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use rentworks_core::rental::CarStatus;
use rentworks_core::types::DbId;
use rentworks_db::models::car::{CreateCar, UpdateCar};
use rentworks_db::repositories::{BranchRepo, CarRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::not_found;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for car listings.
#[derive(Debug, Deserialize)]
pub struct CarListParams {
    pub branch_id: Option<DbId>,
    pub status: Option<String>,
}

/// Request body for PUT /cars/{plate}/status.
#[derive(Debug, Deserialize)]
pub struct SetCarStatusRequest {
    pub status: String,
}

/// Parse a caller-supplied car status strictly; filters and status
/// updates must not fall back to a default the way stored rows do.
fn parse_status(raw: &str) -> Result<CarStatus, AppError> {
    CarStatus::parse(raw)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown car status '{raw}'")))
}

/// POST /api/v1/cars
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCar>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    BranchRepo::find_by_id(&state.pool, input.branch_id)
        .await?
        .ok_or_else(|| not_found("Branch", input.branch_id))?;

    let car = CarRepo::create(&state.pool, &input).await?;

    tracing::info!(
        plate = %car.plate_number,
        branch_id = car.branch_id,
        "Car registered"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: car })))
}

/// GET /api/v1/cars
///
/// Supports optional `branch_id` and `status` filters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CarListParams>,
) -> AppResult<impl IntoResponse> {
    let status = params.status.as_deref().map(parse_status).transpose()?;
    let cars = CarRepo::list(&state.pool, params.branch_id, status).await?;
    Ok(Json(DataResponse { data: cars }))
}

/// GET /api/v1/cars/{plate}
pub async fn get_by_plate(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> AppResult<impl IntoResponse> {
    let car = CarRepo::find_by_plate(&state.pool, &plate)
        .await?
        .ok_or_else(|| not_found("Car", &plate))?;
    Ok(Json(DataResponse { data: car }))
}

/// PUT /api/v1/cars/{plate}
pub async fn update(
    State(state): State<AppState>,
    Path(plate): Path<String>,
    Json(input): Json<UpdateCar>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    if let Some(branch_id) = input.branch_id {
        BranchRepo::find_by_id(&state.pool, branch_id)
            .await?
            .ok_or_else(|| not_found("Branch", branch_id))?;
    }

    let car = CarRepo::update(&state.pool, &plate, &input)
        .await?
        .ok_or_else(|| not_found("Car", &plate))?;

    tracing::info!(plate = %plate, "Car updated");

    Ok(Json(DataResponse { data: car }))
}

/// PUT /api/v1/cars/{plate}/status
pub async fn set_status(
    State(state): State<AppState>,
    Path(plate): Path<String>,
    Json(input): Json<SetCarStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let status = parse_status(&input.status)?;

    let car = CarRepo::set_status(&state.pool, &plate, status)
        .await?
        .ok_or_else(|| not_found("Car", &plate))?;

    tracing::info!(plate = %plate, status = status.as_str(), "Car status changed");

    Ok(Json(DataResponse { data: car }))
}

/// DELETE /api/v1/cars/{plate}
pub async fn delete(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = CarRepo::delete(&state.pool, &plate).await?;
    if !deleted {
        return Err(not_found("Car", &plate));
    }

    tracing::info!(plate = %plate, "Car deleted");

    Ok(StatusCode::NO_CONTENT)
}
