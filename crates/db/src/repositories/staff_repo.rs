//! Repository for the `staff` table.

use rentworks_core::authorization::StaffAuthorization;
use rentworks_core::types::DbId;
use sqlx::PgPool;

use crate::models::staff::{CreateStaff, Staff, StaffWithJob, UpdateStaff};

/// Column list for staff queries.
const COLUMNS: &str = "id, branch_id, job_id, full_name, email, phone, created_at";

/// Column list for staff joined with job and department.
const JOINED_COLUMNS: &str = "s.id, s.branch_id, s.job_id, s.full_name, s.email, s.phone, \
    s.created_at, j.title AS job_title, d.code AS department_code";

/// Provides CRUD operations and authorization lookups for staff.
pub struct StaffRepo;

impl StaffRepo {
    /// Insert a new staff member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStaff) -> Result<Staff, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff (branch_id, job_id, full_name, email, phone)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(input.branch_id)
            .bind(input.job_id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a staff member by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE id = $1");
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a staff member with job title and department code resolved.
    pub async fn find_with_job(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StaffWithJob>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM staff s
             JOIN jobs j ON j.id = s.job_id
             JOIN departments d ON d.id = j.department_id
             WHERE s.id = $1"
        );
        sqlx::query_as::<_, StaffWithJob>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List staff, optionally restricted to one branch.
    pub async fn list(
        pool: &PgPool,
        branch_id: Option<DbId>,
    ) -> Result<Vec<StaffWithJob>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM staff s
             JOIN jobs j ON j.id = s.job_id
             JOIN departments d ON d.id = j.department_id
             WHERE ($1::BIGINT IS NULL OR s.branch_id = $1)
             ORDER BY s.id ASC"
        );
        sqlx::query_as::<_, StaffWithJob>(&query)
            .bind(branch_id)
            .fetch_all(pool)
            .await
    }

    /// Resolve the authorization context for a staff member through the
    /// staff -> job -> department join. One query per call, no caching.
    pub async fn authorization_context(
        pool: &PgPool,
        staff_id: DbId,
    ) -> Result<Option<StaffAuthorization>, sqlx::Error> {
        let row: Option<(DbId, DbId, String)> = sqlx::query_as(
            "SELECT s.id, s.branch_id, d.code
             FROM staff s
             JOIN jobs j ON j.id = s.job_id
             JOIN departments d ON d.id = j.department_id
             WHERE s.id = $1",
        )
        .bind(staff_id)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|(staff_id, branch_id, department_code)| StaffAuthorization {
            staff_id,
            branch_id,
            department_code,
        }))
    }

    /// Update a staff member. Returns the updated row, or `None` if not found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaff,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!(
            "UPDATE staff SET
                branch_id = COALESCE($1, branch_id),
                job_id = COALESCE($2, job_id),
                full_name = COALESCE($3, full_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone)
             WHERE id = $6
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(input.branch_id)
            .bind(input.job_id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a staff member by ID.
    ///
    /// Returns `true` if a row was deleted, `false` if not found.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
