//! Renter (customer) entity model and DTOs.

use rentworks_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A renter row from the `renters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Renter {
    pub id: DbId,
    pub full_name: String,
    pub license_number: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new renter.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRenter {
    #[validate(length(min = 1, max = 120))]
    pub full_name: String,
    #[validate(length(min = 1, max = 40))]
    pub license_number: String,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

/// DTO for updating an existing renter. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRenter {
    #[validate(length(min = 1, max = 120))]
    pub full_name: Option<String>,
    #[validate(length(min = 1, max = 40))]
    pub license_number: Option<String>,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}
