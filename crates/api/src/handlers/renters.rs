//! Handlers for renter management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use rentworks_core::types::DbId;
use rentworks_db::models::renter::{CreateRenter, UpdateRenter};
use rentworks_db::repositories::RenterRepo;

use crate::error::AppResult;
use crate::handlers::not_found;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/renters
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRenter>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let renter = RenterRepo::create(&state.pool, &input).await?;

    tracing::info!(renter_id = renter.id, "Renter created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: renter })))
}

/// GET /api/v1/renters
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let renters = RenterRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: renters }))
}

/// GET /api/v1/renters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let renter = RenterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Renter", id))?;
    Ok(Json(DataResponse { data: renter }))
}

/// PUT /api/v1/renters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRenter>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let renter = RenterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Renter", id))?;

    tracing::info!(renter_id = id, "Renter updated");

    Ok(Json(DataResponse { data: renter }))
}

/// DELETE /api/v1/renters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RenterRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found("Renter", id));
    }

    tracing::info!(renter_id = id, "Renter deleted");

    Ok(StatusCode::NO_CONTENT)
}
