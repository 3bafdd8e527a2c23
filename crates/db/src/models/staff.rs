//! Staff entity model and DTOs.

use rentworks_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A staff row from the `staff` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Staff {
    pub id: DbId,
    pub branch_id: DbId,
    pub job_id: DbId,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
}

/// A staff row joined with its job title and department code, for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StaffWithJob {
    pub id: DbId,
    pub branch_id: DbId,
    pub job_id: DbId,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub job_title: String,
    pub department_code: String,
}

/// DTO for creating a new staff member.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStaff {
    pub branch_id: DbId,
    pub job_id: DbId,
    #[validate(length(min = 1, max = 120))]
    pub full_name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// DTO for updating an existing staff member. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStaff {
    pub branch_id: Option<DbId>,
    pub job_id: Option<DbId>,
    #[validate(length(min = 1, max = 120))]
    pub full_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
}
