//! Car entity model and DTOs.
//!
//! Cars are keyed by plate number. Status is stored as lowercase TEXT and
//! interpreted through `rentworks_core::rental::CarStatus`.

use rentworks_core::rental::CarStatus;
use rentworks_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A car row from the `cars` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Car {
    pub plate_number: String,
    pub branch_id: DbId,
    pub make: String,
    pub model: String,
    pub model_year: Option<i32>,
    pub daily_rate: Decimal,
    pub status: String,
    pub created_at: Timestamp,
}

impl Car {
    /// Stored status, parsed tolerantly (unknown values read as available).
    pub fn parsed_status(&self) -> CarStatus {
        CarStatus::parse_or_default(&self.status)
    }
}

/// DTO for registering a new car.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCar {
    #[validate(length(min = 2, max = 20))]
    pub plate_number: String,
    pub branch_id: DbId,
    #[validate(length(min = 1, max = 60))]
    pub make: String,
    #[validate(length(min = 1, max = 60))]
    pub model: String,
    #[validate(range(min = 1980, max = 2100))]
    pub model_year: Option<i32>,
    pub daily_rate: Decimal,
}

/// DTO for updating an existing car. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCar {
    pub branch_id: Option<DbId>,
    #[validate(length(min = 1, max = 60))]
    pub make: Option<String>,
    #[validate(length(min = 1, max = 60))]
    pub model: Option<String>,
    #[validate(range(min = 1980, max = 2100))]
    pub model_year: Option<i32>,
    pub daily_rate: Option<Decimal>,
}
