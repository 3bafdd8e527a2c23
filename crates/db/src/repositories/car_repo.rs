//! Repository for the `cars` table (keyed by plate number).

use rentworks_core::rental::CarStatus;
use rentworks_core::types::DbId;
use sqlx::PgPool;

use crate::models::car::{Car, CreateCar, UpdateCar};

/// Column list for cars queries.
const COLUMNS: &str = "plate_number, branch_id, make, model, model_year, daily_rate, \
    status, created_at";

/// Provides CRUD operations for cars.
pub struct CarRepo;

impl CarRepo {
    /// Register a new car, returning the created row. New cars start
    /// available.
    pub async fn create(pool: &PgPool, input: &CreateCar) -> Result<Car, sqlx::Error> {
        let query = format!(
            "INSERT INTO cars (plate_number, branch_id, make, model, model_year, daily_rate)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(&input.plate_number)
            .bind(input.branch_id)
            .bind(&input.make)
            .bind(&input.model)
            .bind(input.model_year)
            .bind(input.daily_rate)
            .fetch_one(pool)
            .await
    }

    /// Find a car by plate number.
    pub async fn find_by_plate(pool: &PgPool, plate: &str) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE plate_number = $1");
        sqlx::query_as::<_, Car>(&query)
            .bind(plate)
            .fetch_optional(pool)
            .await
    }

    /// List cars, optionally filtered by branch and/or stored status.
    pub async fn list(
        pool: &PgPool,
        branch_id: Option<DbId>,
        status: Option<CarStatus>,
    ) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cars
             WHERE ($1::BIGINT IS NULL OR branch_id = $1)
               AND ($2::TEXT IS NULL OR status = $2)
             ORDER BY plate_number ASC"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(branch_id)
            .bind(status.map(CarStatus::as_str))
            .fetch_all(pool)
            .await
    }

    /// Update a car's descriptive fields. Returns the updated row, or
    /// `None` if not found.
    pub async fn update(
        pool: &PgPool,
        plate: &str,
        input: &UpdateCar,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET
                branch_id = COALESCE($1, branch_id),
                make = COALESCE($2, make),
                model = COALESCE($3, model),
                model_year = COALESCE($4, model_year),
                daily_rate = COALESCE($5, daily_rate)
             WHERE plate_number = $6
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(input.branch_id)
            .bind(&input.make)
            .bind(&input.model)
            .bind(input.model_year)
            .bind(input.daily_rate)
            .bind(plate)
            .fetch_optional(pool)
            .await
    }

    /// Set a car's status. Returns the updated row, or `None` if not found.
    pub async fn set_status(
        pool: &PgPool,
        plate: &str,
        status: CarStatus,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET status = $1 WHERE plate_number = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(status.as_str())
            .bind(plate)
            .fetch_optional(pool)
            .await
    }

    /// Delete a car by plate number.
    ///
    /// Returns `true` if a row was deleted, `false` if not found.
    pub async fn delete(pool: &PgPool, plate: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE plate_number = $1")
            .bind(plate)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
