use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::booking_types::{BookingError, BookingPayload, BookingRecord};

/// Booking owner used when the caller does not supply a `userId`.
///
/// Points at the seeded admin account.
pub const DEFAULT_BOOKING_USER_ID: i32 = 1;

const BOOKING_PROJECTION: &str = r#"
    SELECT
        b.id, b.slip_id, s.name AS slip_name, b.guest_name, b.guest_email,
        b.guest_phone, b.check_in, b.check_out, b.boat_length,
        b.boat_make_model, b.user_type, b.nights, b.total_cost, b.status,
        b.booking_date, b.payment_status, b.payment_date, b.payment_method,
        b.rental_agreement_name, b.insurance_proof_name, b.rental_property,
        b.rental_start_date, b.rental_end_date
    FROM bookings b
    LEFT JOIN slips s ON b.slip_id = s.id
"#;

/// Service for persisting bookings and producing their client-facing
/// projections
pub struct BookingService {
    pool: PgPool,
}

impl BookingService {
    /// Creates a new instance of `BookingService` with the provided database connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists a booking and returns its projection with the slip name
    /// resolved.
    ///
    /// `nights` and `total_cost` are stored as supplied; no cross-check
    /// against the check-in/check-out span is performed.
    pub async fn create_booking(
        &self,
        booking: &BookingPayload,
    ) -> Result<BookingRecord, BookingError> {
        let row = sqlx::query(
            r#"
            INSERT INTO bookings (
                slip_id, user_id, guest_name, guest_email, guest_phone,
                check_in, check_out, boat_length, boat_make_model, user_type,
                nights, total_cost, status, booking_date, payment_status,
                payment_method, payment_date, rental_agreement_name,
                insurance_proof_name, rental_property, rental_start_date,
                rental_end_date
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22
            )
            RETURNING id
            "#,
        )
        .bind(booking.slip_id)
        .bind(booking.user_id.unwrap_or(DEFAULT_BOOKING_USER_ID))
        .bind(booking.guest_name.trim())
        .bind(&booking.guest_email)
        .bind(&booking.guest_phone)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.boat_length)
        .bind(&booking.boat_make_model)
        .bind(booking.user_type.as_deref().unwrap_or("renter"))
        .bind(booking.nights)
        .bind(booking.total_cost)
        .bind(booking.status.as_deref().unwrap_or("pending"))
        .bind(booking.booking_date)
        .bind(booking.payment_status.as_deref().unwrap_or("pending"))
        .bind(booking.payment_method.as_deref().unwrap_or("stripe"))
        .bind(booking.payment_date)
        .bind(&booking.rental_agreement_name)
        .bind(&booking.insurance_proof_name)
        .bind(&booking.rental_property)
        .bind(booking.rental_start_date)
        .bind(booking.rental_end_date)
        .fetch_one(&self.pool)
        .await?;

        self.get_booking(row.get("id")).await
    }

    /// Gets a booking projection by id
    pub async fn get_booking(&self, booking_id: i32) -> Result<BookingRecord, BookingError> {
        let query = format!("{} WHERE b.id = $1", BOOKING_PROJECTION);
        let row = sqlx::query(&query)
            .bind(booking_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(record_from_row(&row)),
            None => Err(BookingError::NotFound),
        }
    }

    /// Gets all bookings, newest first, with slip names inlined
    pub async fn get_all_bookings(&self) -> Result<Vec<BookingRecord>, BookingError> {
        let query = format!("{} ORDER BY b.created_at DESC", BOOKING_PROJECTION);
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(record_from_row).collect())
    }

    /// Records a successful payment against a booking.
    ///
    /// Sets `payment_status` to `paid` and stamps the payment date.
    pub async fn mark_booking_paid(
        &self,
        booking_id: i32,
        payment_method: &str,
    ) -> Result<BookingRecord, BookingError> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET payment_status = 'paid',
                payment_method = $1,
                payment_date = NOW(),
                updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(payment_method)
        .bind(booking_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(BookingError::NotFound);
        }

        self.get_booking(booking_id).await
    }
}

fn record_from_row(row: &PgRow) -> BookingRecord {
    BookingRecord {
        id: row.get("id"),
        slip_id: row.get("slip_id"),
        slip_name: row.get("slip_name"),
        guest_name: row.get("guest_name"),
        guest_email: row.get("guest_email"),
        guest_phone: row.get("guest_phone"),
        check_in: row.get("check_in"),
        check_out: row.get("check_out"),
        boat_length: row.get("boat_length"),
        boat_make_model: row.get("boat_make_model"),
        user_type: row.get("user_type"),
        nights: row.get("nights"),
        total_cost: row.get("total_cost"),
        status: row.get("status"),
        booking_date: row.get("booking_date"),
        payment_status: row.get("payment_status"),
        payment_date: row.get("payment_date"),
        payment_method: row.get("payment_method"),
        rental_agreement_name: row.get("rental_agreement_name"),
        insurance_proof_name: row.get("insurance_proof_name"),
        rental_property: row.get("rental_property"),
        rental_start_date: row.get("rental_start_date"),
        rental_end_date: row.get("rental_end_date"),
    }
}
