//! HTTP-level integration tests for the rental endpoints: booking,
//! pickup, cancellation, listings, and the derived lateness view.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router.
//! Fixtures are created through the repository layer, then behaviour is
//! verified through the HTTP API.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, build_test_app, expect_json, get, post_json};
use rust_decimal::Decimal;
use serde_json::json;
use sqlx::PgPool;

use rentworks_db::models::branch::CreateBranch;
use rentworks_db::models::car::CreateCar;
use rentworks_db::models::renter::CreateRenter;
use rentworks_db::models::staff::CreateStaff;
use rentworks_db::repositories::{BranchRepo, CarRepo, RenterRepo, StaffRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Fixture {
    renter_id: i64,
    staff_id: i64,
    plate: String,
}

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
            model_year: Some(2021),
            daily_rate: Decimal::new(3550, 2),
        },
    )
    .await
    .unwrap();

    Fixture {
        renter_id: renter.id,
        staff_id: staff.id,
        plate: plate.to_string(),
    }
}

fn booking_body(f: &Fixture) -> serde_json::Value {
    let now = Utc::now();
    json!({
        "renter_id": f.renter_id,
        "car_plate": f.plate,
        "expected_pickup_at": now + Duration::hours(1),
        "expected_return_at": now + Duration::days(2),
        "total_payment": "71.00",
    })
}

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn booking_creates_upcoming_rental_and_holds_car(pool: PgPool) {
    let f = fixture(&pool, "A-100").await;
    let app = build_test_app(pool.clone());

    let response = post_json(app.clone(), "/api/v1/rentals", booking_body(&f)).await;
    let json = expect_json(response, StatusCode::CREATED).await;
    assert_eq!(json["data"]["status"], "upcoming");
    assert_eq!(json["data"]["car_plate"], "A-100");

    let car = CarRepo::find_by_plate(&pool, "A-100").await.unwrap().unwrap();
    assert_eq!(car.status, "rented");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn booking_a_held_car_conflicts(pool: PgPool) {
    let f = fixture(&pool, "A-200").await;
    let app = build_test_app(pool);

    let first = post_json(app.clone(), "/api/v1/rentals", booking_body(&f)).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app, "/api/v1/rentals", booking_body(&f)).await;
    let json = expect_json(second, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn booking_unknown_renter_is_404(pool: PgPool) {
    let f = fixture(&pool, "A-300").await;
    let app = build_test_app(pool);

    let mut body = booking_body(&f);
    body["renter_id"] = json!(999_999);

    let response = post_json(app, "/api/v1/rentals", body).await;
    let json = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn booking_with_inverted_window_is_400(pool: PgPool) {
    let f = fixture(&pool, "A-400").await;
    let app = build_test_app(pool);

    let now = Utc::now();
    let mut body = booking_body(&f);
    body["expected_pickup_at"] = json!(now + Duration::days(3));
    body["expected_return_at"] = json!(now + Duration::days(2));

    let response = post_json(app, "/api/v1/rentals", body).await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Pickup and cancellation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn pickup_then_cancel_releases_the_car(pool: PgPool) {
    let f = fixture(&pool, "A-500").await;
    let app = build_test_app(pool.clone());

    let booked = post_json(app.clone(), "/api/v1/rentals", booking_body(&f)).await;
    let rental_id = body_json(booked).await["data"]["id"].as_i64().unwrap();

    let response = post_json(
        app.clone(),
        &format!("/api/v1/rentals/{rental_id}/pickup"),
        json!({ "staff_id": f.staff_id }),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "active");

    // Pickup is not repeatable.
    let again = post_json(
        app.clone(),
        &format!("/api/v1/rentals/{rental_id}/pickup"),
        json!({ "staff_id": f.staff_id }),
    )
    .await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let response = post_json(
        app,
        &format!("/api/v1/rentals/{rental_id}/cancel"),
        json!({}),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "cancelled");

    let car = CarRepo::find_by_plate(&pool, "A-500").await.unwrap().unwrap();
    assert_eq!(car.status, "available");
}

// ---------------------------------------------------------------------------
// Derived lateness view
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn active_rental_past_deadline_surfaces_as_overdue(pool: PgPool) {
    let f = fixture(&pool, "A-600").await;
    let app = build_test_app(pool.clone());

    let booked = post_json(app.clone(), "/api/v1/rentals", booking_body(&f)).await;
    let rental_id = body_json(booked).await["data"]["id"].as_i64().unwrap();
    post_json(
        app.clone(),
        &format!("/api/v1/rentals/{rental_id}/pickup"),
        json!({ "staff_id": f.staff_id }),
    )
    .await;

    // 7.5 hours past the deadline: ceiling rounds the projection to 8.
    sqlx::query(
        "UPDATE rentals SET expected_return_at = NOW() - INTERVAL '7 hours 30 minutes'
         WHERE id = $1",
    )
    .bind(rental_id)
    .execute(&pool)
    .await
    .unwrap();

    let response = get(app.clone(), &format!("/api/v1/rentals/{rental_id}")).await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "active");
    assert_eq!(json["data"]["effective_status"], "overdue");
    assert_eq!(json["data"]["is_late"], true);
    assert_eq!(json["data"]["late_hours"], 8);

    let response = get(
        app.clone(),
        &format!("/api/v1/rentals/{rental_id}/late-status"),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["late_hours"], 8);
    // 6 * 50 + 2 * 100
    assert_eq!(json["data"]["projected_penalty"], "500");

    let response = get(app, "/api/v1/rentals/overdue").await;
    let json = expect_json(response, StatusCode::OK).await;
    let overdue = json["data"].as_array().unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0]["id"].as_i64(), Some(rental_id));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_rejects_unknown_status_filter(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/rentals?status=parked").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_unknown_rental_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/rentals/424242").await;
    let json = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
