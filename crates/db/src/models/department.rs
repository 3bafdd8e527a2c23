//! Department and job catalogue models.
//!
//! Departments and jobs are seeded by migration; the API only lists them
//! (staff records reference a job, jobs reference a department).

use rentworks_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A department row from the `departments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    /// Short stable code, e.g. `OPS` for Operations.
    pub code: String,
    pub name: String,
}

/// A job row from the `jobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Job {
    pub id: DbId,
    pub department_id: DbId,
    pub title: String,
}
