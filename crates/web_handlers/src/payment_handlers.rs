use actix_web::{HttpResponse, Result, web};
use sqlx::PgPool;

use payments::StripeClient;
use payments::types::*;

use crate::booking_service::BookingService;

/// Creates a payment intent with the payment processor.
///
/// Falls back to the fixed placeholder amount when the caller omits one.
pub async fn create_payment_intent(
    stripe: web::Data<StripeClient>,
    request: web::Json<CreatePaymentIntentRequest>,
) -> Result<HttpResponse, PaymentError> {
    let amount = request.amount.unwrap_or(DEFAULT_AMOUNT_CENTS);

    let intent = stripe.create_payment_intent(amount, CURRENCY).await?;

    let response = PaymentIntentResponse {
        client_secret: intent.client_secret,
        payment_intent_id: intent.id,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Retrieves a payment intent's current state from the processor.
///
/// Rejects locally when `payment_intent_id` is missing, without contacting
/// the processor. When the caller links a `booking_id` and the intent has
/// succeeded, the booking's payment is recorded as a follow-up write.
pub async fn confirm_payment(
    pool: web::Data<PgPool>,
    stripe: web::Data<StripeClient>,
    request: web::Json<ConfirmPaymentRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    let intent_id = request
        .payment_intent_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            PaymentError::Validation("payment_intent_id is required".to_string())
        })?;

    let intent = stripe.retrieve_payment_intent(intent_id).await?;

    let mut recorded_booking = None;
    if let Some(booking_id) = request.booking_id {
        if intent.status == "succeeded" {
            let booking_service = BookingService::new(pool.get_ref().clone());
            booking_service.mark_booking_paid(booking_id, "stripe").await?;
            recorded_booking = Some(booking_id);
        } else {
            log::warn!(
                "Not recording payment for booking {}: intent {} is {}",
                booking_id,
                intent.id,
                intent.status
            );
        }
    }

    let response = ConfirmPaymentResponse {
        status: intent.status,
        amount: intent.amount,
        currency: intent.currency,
        booking_id: recorded_booking,
    };

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;
    use sqlx::postgres::PgPoolOptions;

    #[actix_web::test]
    async fn test_confirm_payment_requires_intent_id() {
        // Lazy pool: no connection is made unless a query runs
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/dock_rental")
            .unwrap();
        let stripe = StripeClient::new("sk_test_123").unwrap();

        let request = ConfirmPaymentRequest {
            payment_intent_id: None,
            booking_id: None,
        };

        let result = confirm_payment(
            web::Data::new(pool),
            web::Data::new(stripe),
            web::Json(request),
        )
        .await;

        let err = result.err().expect("missing intent id must be rejected");
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[actix_web::test]
    async fn test_confirm_payment_rejects_empty_intent_id() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/dock_rental")
            .unwrap();
        let stripe = StripeClient::new("sk_test_123").unwrap();

        let request = ConfirmPaymentRequest {
            payment_intent_id: Some("".to_string()),
            booking_id: None,
        };

        let result = confirm_payment(
            web::Data::new(pool),
            web::Data::new(stripe),
            web::Json(request),
        )
        .await;

        assert!(result.is_err());
    }
}
