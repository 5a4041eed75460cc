use actix_web::{HttpResponse, Result, web};
use sqlx::PgPool;
use validator::Validate;

use crate::booking_service::BookingService;
use crate::booking_types::*;

/// Creates a new booking from the nested booking payload.
///
/// Returns a 201 Created response with the full booking projection,
/// including the resolved slip name.
pub async fn create_booking(
    pool: web::Data<PgPool>,
    request: web::Json<CreateBookingRequest>,
) -> Result<HttpResponse, BookingError> {
    // Validate the request
    request
        .validate()
        .map_err(|e| BookingError::Validation(format!("Validation error: {}", e)))?;

    let booking_service = BookingService::new(pool.get_ref().clone());
    let booking = booking_service.create_booking(&request.booking).await?;

    let response = CreateBookingResponse {
        message: "Booking created successfully".to_string(),
        booking,
    };

    Ok(HttpResponse::Created().json(response))
}
