//! Repository for the `branches` table.

use rentworks_core::types::DbId;
use sqlx::PgPool;

use crate::models::branch::{Branch, CreateBranch, UpdateBranch};

/// Column list for branches queries.
const COLUMNS: &str = "id, name, address, phone, created_at";

/// Provides CRUD operations for branches.
pub struct BranchRepo;

impl BranchRepo {
    /// Insert a new branch, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBranch) -> Result<Branch, sqlx::Error> {
        let query = format!(
            "INSERT INTO branches (name, address, phone)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Branch>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a branch by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Branch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM branches WHERE id = $1");
        sqlx::query_as::<_, Branch>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all branches by creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Branch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM branches ORDER BY id ASC");
        sqlx::query_as::<_, Branch>(&query).fetch_all(pool).await
    }

    /// Update a branch. Returns the updated row, or `None` if not found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBranch,
    ) -> Result<Option<Branch>, sqlx::Error> {
        let query = format!(
            "UPDATE branches SET
                name = COALESCE($1, name),
                address = COALESCE($2, address),
                phone = COALESCE($3, phone)
             WHERE id = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Branch>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a branch by ID.
    ///
    /// Returns `true` if a row was deleted, `false` if not found.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM branches WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
