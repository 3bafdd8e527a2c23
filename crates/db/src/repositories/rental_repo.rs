//! Repository for the `rentals` table, including the transactional
//! lifecycle operations (booking, pickup, cancellation, return).

use rentworks_core::rental::RentalStatus;
use rentworks_core::types::DbId;
use sqlx::PgPool;

use crate::models::rental::{CreateRental, Rental, RentalReceiptRow};

/// Column list for rentals queries.
const COLUMNS: &str = "id, renter_id, car_plate, branch_id, pickup_staff_id, return_staff_id, \
    created_at, expected_pickup_at, actual_pickup_at, expected_return_at, actual_return_at, \
    total_payment, status";

/// Provides persistence operations for rentals.
pub struct RentalRepo;

impl RentalRepo {
    /// Book a rental: put the car on hold and insert the rental row in one
    /// transaction. The rental's branch is the car's branch at booking
    /// time.
    ///
    /// Returns `None` when the car is missing or not currently available
    /// (the hold update matches no row), in which case nothing is written.
    pub async fn book(pool: &PgPool, input: &CreateRental) -> Result<Option<Rental>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let held: Option<(DbId,)> = sqlx::query_as(
            "UPDATE cars SET status = 'rented'
             WHERE plate_number = $1 AND status = 'available'
             RETURNING branch_id",
        )
        .bind(&input.car_plate)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((branch_id,)) = held else {
            return Ok(None);
        };

        let query = format!(
            "INSERT INTO rentals
                (renter_id, car_plate, branch_id, expected_pickup_at,
                 expected_return_at, total_payment)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let rental = sqlx::query_as::<_, Rental>(&query)
            .bind(input.renter_id)
            .bind(&input.car_plate)
            .bind(branch_id)
            .bind(input.expected_pickup_at)
            .bind(input.expected_return_at)
            .bind(input.total_payment)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(rental))
    }

    /// Find a rental by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rentals WHERE id = $1");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List rentals, optionally filtered by stored status and/or renter.
    pub async fn list(
        pool: &PgPool,
        status: Option<RentalStatus>,
        renter_id: Option<DbId>,
    ) -> Result<Vec<Rental>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rentals
             WHERE ($1::TEXT IS NULL OR status = $1)
               AND ($2::BIGINT IS NULL OR renter_id = $2)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(status.map(RentalStatus::as_str))
            .bind(renter_id)
            .fetch_all(pool)
            .await
    }

    /// List active rentals whose expected return time has already passed.
    ///
    /// Pull-based: reflects reality only at the moment of the call.
    pub async fn list_overdue(pool: &PgPool) -> Result<Vec<Rental>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rentals
             WHERE status = 'active' AND expected_return_at < NOW()
             ORDER BY expected_return_at ASC"
        );
        sqlx::query_as::<_, Rental>(&query).fetch_all(pool).await
    }

    /// Move an upcoming rental to active, stamping the pickup time and
    /// staff. Returns `None` when the rental is missing or not upcoming.
    pub async fn mark_picked_up(
        pool: &PgPool,
        id: DbId,
        staff_id: DbId,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!(
            "UPDATE rentals SET
                status = 'active',
                actual_pickup_at = NOW(),
                pickup_staff_id = $2
             WHERE id = $1 AND status = 'upcoming'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .bind(staff_id)
            .fetch_optional(pool)
            .await
    }

    /// Cancel an open rental and release its car, in one transaction.
    ///
    /// Returns `None` when the rental is missing or already terminal, in
    /// which case nothing is written.
    pub async fn cancel(pool: &PgPool, id: DbId) -> Result<Option<Rental>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE rentals SET status = 'cancelled'
             WHERE id = $1 AND status IN ('upcoming', 'active')
             RETURNING {COLUMNS}"
        );
        let rental = sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(rental) = rental else {
            return Ok(None);
        };

        sqlx::query("UPDATE cars SET status = 'available' WHERE plate_number = $1")
            .bind(&rental.car_plate)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(rental))
    }

    /// Complete a return: release the car, then mark the rental completed
    /// with the acting staff and an `actual_return_at` stamped by the
    /// database. Both updates run in one transaction, so a rental that is
    /// already terminal leaves the car untouched.
    ///
    /// Returns `None` when the rental is missing or not open.
    pub async fn complete_return(
        pool: &PgPool,
        id: DbId,
        staff_id: DbId,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE cars SET status = 'available'
             WHERE plate_number = (SELECT car_plate FROM rentals WHERE id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE rentals SET
                status = 'completed',
                return_staff_id = $2,
                actual_return_at = NOW()
             WHERE id = $1 AND status IN ('upcoming', 'active')
             RETURNING {COLUMNS}"
        );
        let rental = sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .bind(staff_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(rental) = rental else {
            // Dropping the transaction rolls back the car release.
            return Ok(None);
        };

        tx.commit().await?;
        Ok(Some(rental))
    }

    /// Fetch the joined row backing the rental receipt.
    pub async fn receipt_data(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RentalReceiptRow>, sqlx::Error> {
        sqlx::query_as::<_, RentalReceiptRow>(
            "SELECT r.id AS rental_id,
                    rn.full_name AS renter_name,
                    rn.phone AS renter_phone,
                    rn.email AS renter_email,
                    c.make AS car_make,
                    c.model AS car_model,
                    r.car_plate,
                    c.daily_rate,
                    r.created_at,
                    r.actual_pickup_at,
                    r.expected_return_at,
                    r.actual_return_at,
                    ps.full_name AS pickup_staff_name,
                    rs.full_name AS return_staff_name,
                    r.status,
                    r.total_payment
             FROM rentals r
             JOIN renters rn ON rn.id = r.renter_id
             JOIN cars c ON c.plate_number = r.car_plate
             LEFT JOIN staff ps ON ps.id = r.pickup_staff_id
             LEFT JOIN staff rs ON rs.id = r.return_staff_id
             WHERE r.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
