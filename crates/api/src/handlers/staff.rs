//! Handlers for staff management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use rentworks_core::types::DbId;
use rentworks_db::models::staff::{CreateStaff, UpdateStaff};
use rentworks_db::repositories::{BranchRepo, JobRepo, StaffRepo};

use crate::error::AppResult;
use crate::handlers::not_found;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for staff listings.
#[derive(Debug, Deserialize)]
pub struct StaffListParams {
    pub branch_id: Option<DbId>,
}

/// POST /api/v1/staff
///
/// The referenced branch and job must exist; the FK targets are checked
/// up front so the caller gets a 404 naming the missing entity instead
/// of an opaque constraint failure.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStaff>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    BranchRepo::find_by_id(&state.pool, input.branch_id)
        .await?
        .ok_or_else(|| not_found("Branch", input.branch_id))?;
    JobRepo::find_by_id(&state.pool, input.job_id)
        .await?
        .ok_or_else(|| not_found("Job", input.job_id))?;

    let staff = StaffRepo::create(&state.pool, &input).await?;

    tracing::info!(
        staff_id = staff.id,
        branch_id = staff.branch_id,
        job_id = staff.job_id,
        "Staff member created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: staff })))
}

/// GET /api/v1/staff
///
/// Lists staff with job title and department code resolved. Supports an
/// optional `branch_id` filter.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<StaffListParams>,
) -> AppResult<impl IntoResponse> {
    let staff = StaffRepo::list(&state.pool, params.branch_id).await?;
    Ok(Json(DataResponse { data: staff }))
}

/// GET /api/v1/staff/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let staff = StaffRepo::find_with_job(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Staff", id))?;
    Ok(Json(DataResponse { data: staff }))
}

/// PUT /api/v1/staff/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStaff>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    if let Some(branch_id) = input.branch_id {
        BranchRepo::find_by_id(&state.pool, branch_id)
            .await?
            .ok_or_else(|| not_found("Branch", branch_id))?;
    }
    if let Some(job_id) = input.job_id {
        JobRepo::find_by_id(&state.pool, job_id)
            .await?
            .ok_or_else(|| not_found("Job", job_id))?;
    }

    let staff = StaffRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Staff", id))?;

    tracing::info!(staff_id = id, "Staff member updated");

    Ok(Json(DataResponse { data: staff }))
}

/// DELETE /api/v1/staff/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = StaffRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found("Staff", id));
    }

    tracing::info!(staff_id = id, "Staff member deleted");

    Ok(StatusCode::NO_CONTENT)
}
