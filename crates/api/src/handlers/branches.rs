//! Handlers for branch management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use rentworks_core::types::DbId;
use rentworks_db::models::branch::{CreateBranch, UpdateBranch};
use rentworks_db::repositories::BranchRepo;

use crate::error::AppResult;
use crate::handlers::not_found;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/branches
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBranch>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let branch = BranchRepo::create(&state.pool, &input).await?;

    tracing::info!(branch_id = branch.id, name = %branch.name, "Branch created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: branch })))
}

/// GET /api/v1/branches
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let branches = BranchRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: branches }))
}

/// GET /api/v1/branches/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let branch = BranchRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Branch", id))?;
    Ok(Json(DataResponse { data: branch }))
}

/// PUT /api/v1/branches/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBranch>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let branch = BranchRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Branch", id))?;

    tracing::info!(branch_id = id, "Branch updated");

    Ok(Json(DataResponse { data: branch }))
}

/// DELETE /api/v1/branches/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = BranchRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found("Branch", id));
    }

    tracing::info!(branch_id = id, "Branch deleted");

    Ok(StatusCode::NO_CONTENT)
}
