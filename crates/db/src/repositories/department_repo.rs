//! Repositories for the seeded `departments` and `jobs` catalogues.

use rentworks_core::types::DbId;
use sqlx::PgPool;

use crate::models::department::{Department, Job};

/// Read access to the department catalogue.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// List all departments by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        sqlx::query_as::<_, Department>("SELECT id, code, name FROM departments ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }
}

/// Read access to the job catalogue.
pub struct JobRepo;

impl JobRepo {
    /// List all jobs by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>("SELECT id, department_id, title FROM jobs ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Find a job by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>("SELECT id, department_id, title FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
