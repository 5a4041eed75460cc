use account_services::types::validate_user_type;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request structure for creating a booking, wrapping the nested booking
/// object the API has always accepted
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// The booking to create
    #[validate(nested)]
    pub booking: BookingPayload,
}

/// Caller-supplied booking fields.
///
/// `nights` and `totalCost` are trusted as given and never recomputed from
/// the check-in/check-out span.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    /// Slip being booked
    pub slip_id: i32,

    /// Booking owner, defaults to the fallback account when omitted
    pub user_id: Option<i32>,

    /// Name of the guest the slip is booked for
    #[validate(length(min = 1, message = "Guest name is required"))]
    pub guest_name: String,

    /// Email address of the guest
    #[validate(email(message = "Please enter a valid guest email"))]
    pub guest_email: String,

    /// Phone number of the guest
    pub guest_phone: Option<String>,

    /// Check-in timestamp
    pub check_in: DateTime<Utc>,

    /// Check-out timestamp
    pub check_out: DateTime<Utc>,

    /// Length of the guest's boat in feet
    pub boat_length: Option<f64>,

    /// Make and model of the guest's boat
    pub boat_make_model: Option<String>,

    /// Account role of the booking guest, defaults to "renter"
    #[validate(custom(function = "validate_user_type"))]
    pub user_type: Option<String>,

    /// Number of nights, as computed by the caller
    pub nights: i32,

    /// Total cost, as computed by the caller
    pub total_cost: f64,

    /// Booking status, defaults to "pending"
    #[validate(custom(function = "validate_booking_status"))]
    pub status: Option<String>,

    /// Timestamp at which the booking was made
    pub booking_date: DateTime<Utc>,

    /// Payment status, defaults to "pending"
    #[validate(custom(function = "validate_payment_status"))]
    pub payment_status: Option<String>,

    /// Payment method, defaults to "stripe"
    pub payment_method: Option<String>,

    /// Timestamp at which payment was made
    pub payment_date: Option<DateTime<Utc>>,

    /// File name of the signed rental agreement
    pub rental_agreement_name: Option<String>,

    /// File name of the insurance proof
    pub insurance_proof_name: Option<String>,

    /// Identifier of the rental property the booking is tied to
    pub rental_property: Option<String>,

    /// Start of the rental-property period
    pub rental_start_date: Option<DateTime<Utc>>,

    /// End of the rental-property period
    pub rental_end_date: Option<DateTime<Utc>>,
}

/// Client-facing booking projection with the related slip name inlined
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// Unique identifier for the booking
    pub id: i32,
    /// Slip the booking is for
    pub slip_id: i32,
    /// Name of the booked slip, `null` when the reference is stale
    pub slip_name: Option<String>,
    /// Name of the guest
    pub guest_name: String,
    /// Email address of the guest
    pub guest_email: String,
    /// Phone number of the guest
    pub guest_phone: Option<String>,
    /// Check-in timestamp
    pub check_in: DateTime<Utc>,
    /// Check-out timestamp
    pub check_out: DateTime<Utc>,
    /// Length of the guest's boat in feet
    pub boat_length: Option<f64>,
    /// Make and model of the guest's boat
    pub boat_make_model: Option<String>,
    /// Account role of the booking guest
    pub user_type: String,
    /// Number of nights
    pub nights: i32,
    /// Total cost
    pub total_cost: f64,
    /// Booking status
    pub status: String,
    /// Timestamp at which the booking was made
    pub booking_date: DateTime<Utc>,
    /// Payment status
    pub payment_status: String,
    /// Timestamp at which payment was made
    pub payment_date: Option<DateTime<Utc>>,
    /// Payment method
    pub payment_method: String,
    /// File name of the signed rental agreement
    pub rental_agreement_name: Option<String>,
    /// File name of the insurance proof
    pub insurance_proof_name: Option<String>,
    /// Identifier of the rental property the booking is tied to
    pub rental_property: Option<String>,
    /// Start of the rental-property period
    pub rental_start_date: Option<DateTime<Utc>>,
    /// End of the rental-property period
    pub rental_end_date: Option<DateTime<Utc>>,
}

/// Response structure for creating a booking
#[derive(Debug, Serialize)]
pub struct CreateBookingResponse {
    /// Message indicating the result of the operation
    pub message: String,
    /// The created booking projection
    pub booking: BookingRecord,
}

/// Response structure for listing bookings
#[derive(Debug, Serialize)]
pub struct ListBookingsResponse {
    /// List of booking projections
    pub bookings: Vec<BookingRecord>,
}

/// Custom error type for booking operations
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Booking not found
    #[error("Booking not found")]
    NotFound,
}

impl actix_web::ResponseError for BookingError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            BookingError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "validation_error",
                "message": msg
            })),
            BookingError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": "booking_not_found",
                "message": "Booking not found"
            })),
            BookingError::Database(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "internal_error",
                    "message": "An internal error occurred"
                }))
            }
        }
    }
}

/// Validates a booking status value
pub fn validate_booking_status(status: &str) -> Result<(), validator::ValidationError> {
    match status {
        "pending" | "confirmed" | "cancelled" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_booking_status")),
    }
}

/// Validates a payment status value
pub fn validate_payment_status(status: &str) -> Result<(), validator::ValidationError> {
    match status {
        "pending" | "paid" | "scheduled" | "exempt" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_payment_status")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn full_payload() -> &'static str {
        r#"{
            "booking": {
                "slipId": 1,
                "guestName": "A",
                "guestEmail": "a@x.com",
                "checkIn": "2024-06-01T00:00:00Z",
                "checkOut": "2024-06-03T00:00:00Z",
                "bookingDate": "2024-05-01T00:00:00Z",
                "nights": 2,
                "totalCost": 120
            }
        }"#
    }

    #[test]
    fn test_payload_round_trips_required_fields() {
        let request: CreateBookingRequest = serde_json::from_str(full_payload()).unwrap();
        let booking = &request.booking;

        assert_eq!(booking.slip_id, 1);
        assert_eq!(booking.guest_name, "A");
        assert_eq!(booking.guest_email, "a@x.com");
        assert_eq!(booking.nights, 2);
        assert_eq!(booking.total_cost, 120.0);
        assert_eq!(
            booking.check_in,
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            booking.check_out,
            Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap()
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_z_suffix_matches_explicit_offset() {
        let with_z: BookingPayload = serde_json::from_str(
            r#"{"slipId":1,"guestName":"A","guestEmail":"a@x.com",
                "checkIn":"2024-06-01T00:00:00Z","checkOut":"2024-06-03T00:00:00+00:00",
                "bookingDate":"2024-05-01T12:30:00Z","nights":2,"totalCost":120}"#,
        )
        .unwrap();

        assert_eq!(
            with_z.check_in,
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            with_z.check_out,
            Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_guest_email_is_rejected() {
        let body = r#"{
            "booking": {
                "slipId": 1,
                "guestName": "A",
                "checkIn": "2024-06-01T00:00:00Z",
                "checkOut": "2024-06-03T00:00:00Z",
                "bookingDate": "2024-05-01T00:00:00Z",
                "nights": 2,
                "totalCost": 120
            }
        }"#;

        assert!(serde_json::from_str::<CreateBookingRequest>(body).is_err());
    }

    #[test]
    fn test_invalid_statuses_are_rejected() {
        let mut request: CreateBookingRequest = serde_json::from_str(full_payload()).unwrap();
        request.booking.status = Some("double-booked".to_string());
        assert!(request.validate().is_err());

        let mut request: CreateBookingRequest = serde_json::from_str(full_payload()).unwrap();
        request.booking.payment_status = Some("refunded".to_string());
        assert!(request.validate().is_err());

        let mut request: CreateBookingRequest = serde_json::from_str(full_payload()).unwrap();
        request.booking.status = Some("confirmed".to_string());
        request.booking.payment_status = Some("exempt".to_string());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = BookingRecord {
            id: 9,
            slip_id: 1,
            slip_name: None,
            guest_name: "A".to_string(),
            guest_email: "a@x.com".to_string(),
            guest_phone: None,
            check_in: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            check_out: Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap(),
            boat_length: Some(24.0),
            boat_make_model: None,
            user_type: "renter".to_string(),
            nights: 2,
            total_cost: 120.0,
            status: "pending".to_string(),
            booking_date: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            payment_status: "pending".to_string(),
            payment_date: None,
            payment_method: "stripe".to_string(),
            rental_agreement_name: None,
            insurance_proof_name: None,
            rental_property: None,
            rental_start_date: None,
            rental_end_date: None,
        };

        let value = serde_json::to_value(record).unwrap();
        assert_eq!(value["slipId"], 1);
        assert_eq!(value["slipName"], serde_json::Value::Null);
        assert_eq!(value["guestName"], "A");
        assert_eq!(value["totalCost"], 120.0);
        assert_eq!(value["paymentStatus"], "pending");
        assert_eq!(value["checkIn"], "2024-06-01T00:00:00Z");
        assert_eq!(value["rentalStartDate"], serde_json::Value::Null);
    }
}
