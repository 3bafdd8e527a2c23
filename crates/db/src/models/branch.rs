//! Branch entity model and DTOs.

use rentworks_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A branch row from the `branches` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Branch {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new branch.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBranch {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// DTO for updating an existing branch. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBranch {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}
