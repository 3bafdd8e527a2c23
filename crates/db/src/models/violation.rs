//! Violation entity model and DTOs.
//!
//! Violations are keyed by a sequential prefixed code (`VLN001`, ...)
//! allocated through `rentworks_core::violation::next_code`.

use rentworks_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A violation row from the `violations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Violation {
    pub code: String,
    pub rental_id: DbId,
    pub staff_id: DbId,
    pub category: String,
    pub penalty_fee: Decimal,
    pub reason: String,
    /// Hours overdue; meaningful only for the Late Return category.
    pub duration_hours: i64,
    pub recorded_at: Timestamp,
}

/// DTO for recording a violation. The code is allocated by the engine,
/// never supplied by the caller.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateViolation {
    pub rental_id: DbId,
    pub staff_id: DbId,
    #[validate(length(min = 1, max = 60))]
    pub category: String,
    pub penalty_fee: Decimal,
    #[validate(length(min = 1, max = 500))]
    pub reason: String,
    #[serde(default)]
    pub duration_hours: i64,
}

/// DTO for updating an existing violation. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateViolation {
    #[validate(length(min = 1, max = 60))]
    pub category: Option<String>,
    pub penalty_fee: Option<Decimal>,
    #[validate(length(min = 1, max = 500))]
    pub reason: Option<String>,
    pub duration_hours: Option<i64>,
}
