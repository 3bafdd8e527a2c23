//! Integration tests for the violation repository: code sequencing
//! against stored rows, the late-return lookup/refresh pair, and the
//! one-late-return-per-rental constraint.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use rentworks_core::violation::{next_code, CATEGORY_CLEANING, CATEGORY_LATE_RETURN};
use rentworks_db::models::branch::CreateBranch;
use rentworks_db::models::car::CreateCar;
use rentworks_db::models::rental::CreateRental;
use rentworks_db::models::renter::CreateRenter;
use rentworks_db::models::staff::CreateStaff;
use rentworks_db::models::violation::CreateViolation;
use rentworks_db::repositories::{
    BranchRepo, CarRepo, RentalRepo, RenterRepo, StaffRepo, ViolationRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Fixture {
    rental_id: i64,
    staff_id: i64,
}

/// Create the whole chain (branch, renter, staff, car, booked rental).
async fn fixture(pool: &PgPool, plate: &str) -> Fixture {
    let branch = BranchRepo::create(
        pool,
        &CreateBranch {
            name: "Central".to_string(),
            address: None,
            phone: None,
        },
    )
    .await
    .unwrap();

    let renter = RenterRepo::create(
        pool,
        &CreateRenter {
            full_name: "Jane Doe".to_string(),
            license_number: format!("DL-{plate}"),
            phone: None,
            email: None,
        },
    )
    .await
    .unwrap();

    let ops_job: (i64,) = sqlx::query_as(
        "SELECT j.id FROM jobs j
         JOIN departments d ON d.id = j.department_id
         WHERE d.code = 'OPS'
         ORDER BY j.id ASC LIMIT 1",
    )
    .fetch_one(pool)
    .await
    .unwrap();

    let staff = StaffRepo::create(
        pool,
        &CreateStaff {
            branch_id: branch.id,
            job_id: ops_job.0,
            full_name: "Avery Ops".to_string(),
            email: None,
            phone: None,
        },
    )
    .await
    .unwrap();

    CarRepo::create(
        pool,
        &CreateCar {
            plate_number: plate.to_string(),
            branch_id: branch.id,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            model_year: None,
            daily_rate: Decimal::new(3550, 2),
        },
    )
    .await
    .unwrap();

    let now = Utc::now();
    let rental = RentalRepo::book(
        pool,
        &CreateRental {
            renter_id: renter.id,
            car_plate: plate.to_string(),
            expected_pickup_at: now - Duration::days(1),
            expected_return_at: now - Duration::hours(8),
            total_payment: Decimal::from(71),
        },
    )
    .await
    .unwrap()
    .unwrap();

    Fixture {
        rental_id: rental.id,
        staff_id: staff.id,
    }
}

fn cleaning_violation(f: &Fixture) -> CreateViolation {
    CreateViolation {
        rental_id: f.rental_id,
        staff_id: f.staff_id,
        category: CATEGORY_CLEANING.to_string(),
        penalty_fee: Decimal::new(2500, 2),
        reason: "Interior cleaning required".to_string(),
        duration_hours: 0,
    }
}

fn late_violation(f: &Fixture, hours: i64, fee: i64) -> CreateViolation {
    CreateViolation {
        rental_id: f.rental_id,
        staff_id: f.staff_id,
        category: CATEGORY_LATE_RETURN.to_string(),
        penalty_fee: Decimal::from(fee),
        reason: format!("Returned {hours} hour(s) past the expected return time"),
        duration_hours: hours,
    }
}

// ---------------------------------------------------------------------------
// Code sequencing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn first_allocated_code_is_vln001(pool: PgPool) {
    let f = fixture(&pool, "V-100").await;

    assert!(ViolationRepo::max_code(&pool).await.unwrap().is_none());

    let code = next_code(ViolationRepo::max_code(&pool).await.unwrap().as_deref());
    assert_eq!(code, "VLN001");

    let violation = ViolationRepo::create(&pool, &code, &cleaning_violation(&f))
        .await
        .unwrap();
    assert_eq!(violation.code, "VLN001");
}

#[sqlx::test(migrations = "./migrations")]
async fn codes_increment_from_the_stored_maximum(pool: PgPool) {
    let f = fixture(&pool, "V-200").await;

    for expected in ["VLN001", "VLN002", "VLN003"] {
        let code = next_code(ViolationRepo::max_code(&pool).await.unwrap().as_deref());
        assert_eq!(code, expected);
        ViolationRepo::create(&pool, &code, &cleaning_violation(&f))
            .await
            .unwrap();
    }

    assert_eq!(
        ViolationRepo::max_code(&pool).await.unwrap().as_deref(),
        Some("VLN003")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_code_insert_is_a_unique_violation(pool: PgPool) {
    let f = fixture(&pool, "V-250").await;

    ViolationRepo::create(&pool, "VLN001", &cleaning_violation(&f))
        .await
        .unwrap();
    let err = ViolationRepo::create(&pool, "VLN001", &cleaning_violation(&f))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Late-return lookup and refresh
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn late_return_lookup_ignores_other_categories(pool: PgPool) {
    let f = fixture(&pool, "V-300").await;

    ViolationRepo::create(&pool, "VLN001", &cleaning_violation(&f))
        .await
        .unwrap();
    assert!(
        ViolationRepo::find_late_return_for_rental(&pool, f.rental_id)
            .await
            .unwrap()
            .is_none()
    );

    ViolationRepo::create(&pool, "VLN002", &late_violation(&f, 8, 500))
        .await
        .unwrap();
    let found = ViolationRepo::find_late_return_for_rental(&pool, f.rental_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.code, "VLN002");
    assert_eq!(found.duration_hours, 8);
}

#[sqlx::test(migrations = "./migrations")]
async fn refresh_updates_fee_duration_and_reason_in_place(pool: PgPool) {
    let f = fixture(&pool, "V-400").await;

    let original = ViolationRepo::create(&pool, "VLN001", &late_violation(&f, 2, 100))
        .await
        .unwrap();

    let refreshed = ViolationRepo::refresh_late_return(
        &pool,
        "VLN001",
        Decimal::from(500),
        8,
        "Returned 8 hour(s) past the expected return time",
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(refreshed.code, original.code);
    assert_eq!(refreshed.penalty_fee, Decimal::from(500));
    assert_eq!(refreshed.duration_hours, 8);
    assert!(refreshed.recorded_at >= original.recorded_at);

    // Still exactly one violation for the rental.
    let all = ViolationRepo::list_by_rental(&pool, f.rental_id).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn second_late_return_row_per_rental_is_rejected(pool: PgPool) {
    let f = fixture(&pool, "V-500").await;

    ViolationRepo::create(&pool, "VLN001", &late_violation(&f, 2, 100))
        .await
        .unwrap();
    let err = ViolationRepo::create(&pool, "VLN002", &late_violation(&f, 3, 150))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(
                db_err.constraint(),
                Some("uq_violations_one_late_return_per_rental")
            );
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Listing and deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_by_rental_orders_by_recorded_time(pool: PgPool) {
    let f = fixture(&pool, "V-600").await;

    ViolationRepo::create(&pool, "VLN001", &cleaning_violation(&f))
        .await
        .unwrap();
    ViolationRepo::create(&pool, "VLN002", &late_violation(&f, 8, 500))
        .await
        .unwrap();

    let listed = ViolationRepo::list_by_rental(&pool, f.rental_id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].recorded_at <= listed[1].recorded_at);

    assert!(ViolationRepo::delete(&pool, "VLN001").await.unwrap());
    assert!(!ViolationRepo::delete(&pool, "VLN001").await.unwrap());

    let remaining = ViolationRepo::list(&pool).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].code, "VLN002");
}
