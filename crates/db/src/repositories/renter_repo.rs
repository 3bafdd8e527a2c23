//! Repository for the `renters` table.

use rentworks_core::types::DbId;
use sqlx::PgPool;

use crate::models::renter::{CreateRenter, Renter, UpdateRenter};

/// Column list for renters queries.
const COLUMNS: &str = "id, full_name, license_number, phone, email, created_at";

/// Provides CRUD operations for renters.
pub struct RenterRepo;

impl RenterRepo {
    /// Insert a new renter, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRenter) -> Result<Renter, sqlx::Error> {
        let query = format!(
            "INSERT INTO renters (full_name, license_number, phone, email)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Renter>(&query)
            .bind(&input.full_name)
            .bind(&input.license_number)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a renter by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Renter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM renters WHERE id = $1");
        sqlx::query_as::<_, Renter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all renters by creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Renter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM renters ORDER BY id ASC");
        sqlx::query_as::<_, Renter>(&query).fetch_all(pool).await
    }

    /// Update a renter. Returns the updated row, or `None` if not found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRenter,
    ) -> Result<Option<Renter>, sqlx::Error> {
        let query = format!(
            "UPDATE renters SET
                full_name = COALESCE($1, full_name),
                license_number = COALESCE($2, license_number),
                phone = COALESCE($3, phone),
                email = COALESCE($4, email)
             WHERE id = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Renter>(&query)
            .bind(&input.full_name)
            .bind(&input.license_number)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a renter by ID.
    ///
    /// Returns `true` if a row was deleted, `false` if not found.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM renters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
