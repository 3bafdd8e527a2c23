//! Rental entity model and DTOs.

use rentworks_core::rental::{RentalStatus, RentalTiming};
use rentworks_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A rental row from the `rentals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rental {
    pub id: DbId,
    pub renter_id: DbId,
    pub car_plate: String,
    pub branch_id: DbId,
    pub pickup_staff_id: Option<DbId>,
    pub return_staff_id: Option<DbId>,
    pub created_at: Timestamp,
    pub expected_pickup_at: Timestamp,
    pub actual_pickup_at: Option<Timestamp>,
    pub expected_return_at: Timestamp,
    pub actual_return_at: Option<Timestamp>,
    pub total_payment: Decimal,
    pub status: String,
}

impl Rental {
    /// Stored status, parsed tolerantly (unknown values read as upcoming).
    pub fn parsed_status(&self) -> RentalStatus {
        RentalStatus::parse_or_default(&self.status)
    }

    /// The timing view lateness is derived from.
    pub fn timing(&self) -> RentalTiming {
        RentalTiming {
            status: self.parsed_status(),
            expected_return_at: Some(self.expected_return_at),
            actual_return_at: self.actual_return_at,
        }
    }
}

/// DTO for booking a new rental.
///
/// The branch is taken from the car at booking time; the rental starts
/// `upcoming` and the car is put on hold (`rented`) in the same
/// transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRental {
    pub renter_id: DbId,
    pub car_plate: String,
    pub expected_pickup_at: Timestamp,
    pub expected_return_at: Timestamp,
    pub total_payment: Decimal,
}

/// Joined row backing the rental receipt.
#[derive(Debug, Clone, FromRow)]
pub struct RentalReceiptRow {
    pub rental_id: DbId,
    pub renter_name: String,
    pub renter_phone: Option<String>,
    pub renter_email: Option<String>,
    pub car_make: String,
    pub car_model: String,
    pub car_plate: String,
    pub daily_rate: Decimal,
    pub created_at: Timestamp,
    pub actual_pickup_at: Option<Timestamp>,
    pub expected_return_at: Timestamp,
    pub actual_return_at: Option<Timestamp>,
    pub pickup_staff_name: Option<String>,
    pub return_staff_name: Option<String>,
    pub status: String,
    pub total_payment: Decimal,
}
