//! Handlers for the seeded department and job catalogues.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use rentworks_db::repositories::{DepartmentRepo, JobRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/departments
pub async fn list_departments(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let departments = DepartmentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: departments }))
}

/// GET /api/v1/jobs
pub async fn list_jobs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let jobs = JobRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: jobs }))
}
