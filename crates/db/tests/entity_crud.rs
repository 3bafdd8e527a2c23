//! Integration tests for entity CRUD at the repository layer.
//!
//! Exercises branches, renters, cars, and staff against a real database:
//! create/find/list/update/delete, unique constraint behaviour, and the
//! seeded department/job catalogues.

use rust_decimal::Decimal;
use sqlx::PgPool;

use rentworks_db::models::branch::{CreateBranch, UpdateBranch};
use rentworks_db::models::car::{CreateCar, UpdateCar};
use rentworks_db::models::renter::CreateRenter;
use rentworks_db::models::staff::CreateStaff;
use rentworks_db::repositories::{
    BranchRepo, CarRepo, DepartmentRepo, JobRepo, RenterRepo, StaffRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_branch(name: &str) -> CreateBranch {
    CreateBranch {
        name: name.to_string(),
        address: Some("1 Main St".to_string()),
        phone: None,
    }
}

fn new_renter(license: &str) -> CreateRenter {
    CreateRenter {
        full_name: "Jane Doe".to_string(),
        license_number: license.to_string(),
        phone: Some("555-0101".to_string()),
        email: None,
    }
}

fn new_car(plate: &str, branch_id: i64) -> CreateCar {
    CreateCar {
        plate_number: plate.to_string(),
        branch_id,
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        model_year: Some(2021),
        daily_rate: Decimal::new(3550, 2),
    }
}

/// Id of a seeded job belonging to the given department code.
async fn job_id_for(pool: &PgPool, department_code: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(
        "SELECT j.id FROM jobs j
         JOIN departments d ON d.id = j.department_id
         WHERE d.code = $1
         ORDER BY j.id ASC
         LIMIT 1",
    )
    .bind(department_code)
    .fetch_one(pool)
    .await
    .expect("seeded job");
    row.0
}

// ---------------------------------------------------------------------------
// Seeded catalogues
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn departments_and_jobs_are_seeded(pool: PgPool) {
    let departments = DepartmentRepo::list(&pool).await.unwrap();
    assert!(departments.iter().any(|d| d.code == "OPS"));

    let jobs = JobRepo::list(&pool).await.unwrap();
    assert!(!jobs.is_empty());

    let ops_job = job_id_for(&pool, "OPS").await;
    let job = JobRepo::find_by_id(&pool, ops_job).await.unwrap().unwrap();
    assert_eq!(job.id, ops_job);
}

// ---------------------------------------------------------------------------
// Branch CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn branch_crud_roundtrip(pool: PgPool) {
    let branch = BranchRepo::create(&pool, &new_branch("Downtown"))
        .await
        .unwrap();
    assert_eq!(branch.name, "Downtown");

    let found = BranchRepo::find_by_id(&pool, branch.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.address.as_deref(), Some("1 Main St"));

    let updated = BranchRepo::update(
        &pool,
        branch.id,
        &UpdateBranch {
            name: Some("Downtown East".to_string()),
            address: None,
            phone: Some("555-0199".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Downtown East");
    // COALESCE keeps the previous value for absent fields.
    assert_eq!(updated.address.as_deref(), Some("1 Main St"));

    assert!(BranchRepo::delete(&pool, branch.id).await.unwrap());
    assert!(!BranchRepo::delete(&pool, branch.id).await.unwrap());
    assert!(BranchRepo::find_by_id(&pool, branch.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Renter unique license
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_license_number_is_rejected(pool: PgPool) {
    RenterRepo::create(&pool, &new_renter("DL-100")).await.unwrap();

    let err = RenterRepo::create(&pool, &new_renter("DL-100"))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(
                db_err.constraint(),
                Some("uq_renters_license_number")
            );
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Car CRUD and status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn new_cars_start_available(pool: PgPool) {
    let branch = BranchRepo::create(&pool, &new_branch("Airport")).await.unwrap();
    let car = CarRepo::create(&pool, &new_car("AB-123-CD", branch.id))
        .await
        .unwrap();
    assert_eq!(car.status, "available");
    assert_eq!(car.daily_rate, Decimal::new(3550, 2));
}

#[sqlx::test(migrations = "./migrations")]
async fn car_list_filters_by_branch_and_status(pool: PgPool) {
    use rentworks_core::rental::CarStatus;

    let a = BranchRepo::create(&pool, &new_branch("North")).await.unwrap();
    let b = BranchRepo::create(&pool, &new_branch("South")).await.unwrap();

    CarRepo::create(&pool, &new_car("N-001", a.id)).await.unwrap();
    CarRepo::create(&pool, &new_car("S-001", b.id)).await.unwrap();
    CarRepo::set_status(&pool, "S-001", CarStatus::Maintenance)
        .await
        .unwrap()
        .unwrap();

    let north = CarRepo::list(&pool, Some(a.id), None).await.unwrap();
    assert_eq!(north.len(), 1);
    assert_eq!(north[0].plate_number, "N-001");

    let in_shop = CarRepo::list(&pool, None, Some(CarStatus::Maintenance))
        .await
        .unwrap();
    assert_eq!(in_shop.len(), 1);
    assert_eq!(in_shop[0].plate_number, "S-001");

    let everything = CarRepo::list(&pool, None, None).await.unwrap();
    assert_eq!(everything.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn car_update_keeps_unset_fields(pool: PgPool) {
    let branch = BranchRepo::create(&pool, &new_branch("West")).await.unwrap();
    CarRepo::create(&pool, &new_car("W-777", branch.id)).await.unwrap();

    let updated = CarRepo::update(
        &pool,
        "W-777",
        &UpdateCar {
            branch_id: None,
            make: None,
            model: Some("Corolla Hybrid".to_string()),
            model_year: None,
            daily_rate: Some(Decimal::new(4200, 2)),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.make, "Toyota");
    assert_eq!(updated.model, "Corolla Hybrid");
    assert_eq!(updated.daily_rate, Decimal::new(4200, 2));
}

// ---------------------------------------------------------------------------
// Staff and authorization context
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn staff_authorization_context_resolves_department(pool: PgPool) {
    let branch = BranchRepo::create(&pool, &new_branch("Central")).await.unwrap();
    let ops_job = job_id_for(&pool, "OPS").await;
    let sales_job = job_id_for(&pool, "SLS").await;

    let ops = StaffRepo::create(
        &pool,
        &CreateStaff {
            branch_id: branch.id,
            job_id: ops_job,
            full_name: "Avery Ops".to_string(),
            email: None,
            phone: None,
        },
    )
    .await
    .unwrap();

    let sales = StaffRepo::create(
        &pool,
        &CreateStaff {
            branch_id: branch.id,
            job_id: sales_job,
            full_name: "Sam Sales".to_string(),
            email: None,
            phone: None,
        },
    )
    .await
    .unwrap();

    let ctx = StaffRepo::authorization_context(&pool, ops.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ctx.department_code, "OPS");
    assert_eq!(ctx.branch_id, branch.id);

    let ctx = StaffRepo::authorization_context(&pool, sales.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ctx.department_code, "SLS");

    assert!(StaffRepo::authorization_context(&pool, 999_999)
        .await
        .unwrap()
        .is_none());

    let listed = StaffRepo::list(&pool, Some(branch.id)).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().any(|s| s.department_code == "OPS"));
}
