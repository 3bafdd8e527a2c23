//! Repository for the `violations` table (keyed by sequential code).

use rentworks_core::types::DbId;
use rentworks_core::violation::{CATEGORY_LATE_RETURN, CODE_PREFIX};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::violation::{CreateViolation, UpdateViolation, Violation};

/// Column list for violations queries.
const COLUMNS: &str =
    "code, rental_id, staff_id, category, penalty_fee, reason, duration_hours, recorded_at";

/// Provides persistence operations for violations.
pub struct ViolationRepo;

impl ViolationRepo {
    /// Insert a violation under the given pre-allocated code.
    pub async fn create(
        pool: &PgPool,
        code: &str,
        input: &CreateViolation,
    ) -> Result<Violation, sqlx::Error> {
        let query = format!(
            "INSERT INTO violations
                (code, rental_id, staff_id, category, penalty_fee, reason, duration_hours)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Violation>(&query)
            .bind(code)
            .bind(input.rental_id)
            .bind(input.staff_id)
            .bind(&input.category)
            .bind(input.penalty_fee)
            .bind(&input.reason)
            .bind(input.duration_hours)
            .fetch_one(pool)
            .await
    }

    /// Find a violation by code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Violation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM violations WHERE code = $1");
        sqlx::query_as::<_, Violation>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List all violations ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<Violation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM violations ORDER BY code ASC");
        sqlx::query_as::<_, Violation>(&query).fetch_all(pool).await
    }

    /// List a rental's violations ordered by recorded time.
    pub async fn list_by_rental(
        pool: &PgPool,
        rental_id: DbId,
    ) -> Result<Vec<Violation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM violations
             WHERE rental_id = $1
             ORDER BY recorded_at ASC, code ASC"
        );
        sqlx::query_as::<_, Violation>(&query)
            .bind(rental_id)
            .fetch_all(pool)
            .await
    }

    /// The lexicographically maximal code carrying the standard prefix, or
    /// `None` when no violations exist yet. Feeds
    /// `rentworks_core::violation::next_code`.
    pub async fn max_code(pool: &PgPool) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT code FROM violations
             WHERE code LIKE $1
             ORDER BY code DESC
             LIMIT 1",
        )
        .bind(format!("{CODE_PREFIX}%"))
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(code,)| code))
    }

    /// The rental's late-return violation, if one has been recorded.
    pub async fn find_late_return_for_rental(
        pool: &PgPool,
        rental_id: DbId,
    ) -> Result<Option<Violation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM violations
             WHERE rental_id = $1 AND category = $2"
        );
        sqlx::query_as::<_, Violation>(&query)
            .bind(rental_id)
            .bind(CATEGORY_LATE_RETURN)
            .fetch_optional(pool)
            .await
    }

    /// Refresh an existing late-return violation in place with freshly
    /// computed fee, duration, and reason; the recorded time moves to now.
    pub async fn refresh_late_return(
        pool: &PgPool,
        code: &str,
        penalty_fee: Decimal,
        duration_hours: i64,
        reason: &str,
    ) -> Result<Option<Violation>, sqlx::Error> {
        let query = format!(
            "UPDATE violations SET
                penalty_fee = $2,
                duration_hours = $3,
                reason = $4,
                recorded_at = NOW()
             WHERE code = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Violation>(&query)
            .bind(code)
            .bind(penalty_fee)
            .bind(duration_hours)
            .bind(reason)
            .fetch_optional(pool)
            .await
    }

    /// Update a violation. Returns the updated row, or `None` if not found.
    pub async fn update(
        pool: &PgPool,
        code: &str,
        input: &UpdateViolation,
    ) -> Result<Option<Violation>, sqlx::Error> {
        let query = format!(
            "UPDATE violations SET
                category = COALESCE($1, category),
                penalty_fee = COALESCE($2, penalty_fee),
                reason = COALESCE($3, reason),
                duration_hours = COALESCE($4, duration_hours)
             WHERE code = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Violation>(&query)
            .bind(&input.category)
            .bind(input.penalty_fee)
            .bind(&input.reason)
            .bind(input.duration_hours)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Delete a violation by code.
    ///
    /// Returns `true` if a row was deleted, `false` if not found.
    pub async fn delete(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM violations WHERE code = $1")
            .bind(code)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
