use serde::{Deserialize, Serialize};

/// Amount charged when the caller omits one, in minor currency units.
pub const DEFAULT_AMOUNT_CENTS: i64 = 1000;

/// Currency used for all payment intents.
pub const CURRENCY: &str = "usd";

/// Request structure for creating a payment intent
#[derive(Debug, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Amount in minor currency units, defaults to [`DEFAULT_AMOUNT_CENTS`]
    pub amount: Option<i64>,
}

/// Response structure for creating a payment intent
#[derive(Debug, Serialize)]
pub struct PaymentIntentResponse {
    /// Client-side secret used to complete the payment
    pub client_secret: Option<String>,
    /// Identifier of the created intent
    pub payment_intent_id: String,
}

/// Request structure for confirming a payment
#[derive(Debug, Deserialize)]
pub struct ConfirmPaymentRequest {
    /// Identifier of a previously created payment intent
    pub payment_intent_id: Option<String>,
    /// Booking to mark as paid when the intent has succeeded
    pub booking_id: Option<i32>,
}

/// Response structure for confirming a payment
#[derive(Debug, Serialize)]
pub struct ConfirmPaymentResponse {
    /// Current status of the intent as reported by the processor
    pub status: String,
    /// Amount of the intent in minor currency units
    pub amount: i64,
    /// Currency of the intent
    pub currency: String,
    /// Booking whose payment was recorded, when one was linked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<i32>,
}

/// Payment intent as returned by the Stripe API
#[derive(Debug, Deserialize)]
pub struct PaymentIntent {
    /// Identifier of the intent
    pub id: String,
    /// Client-side secret for completing the payment
    pub client_secret: Option<String>,
    /// Current status of the intent
    pub status: String,
    /// Amount in minor currency units
    pub amount: i64,
    /// Three-letter currency code
    pub currency: String,
}

/// Error envelope returned by the Stripe API
#[derive(Debug, Deserialize)]
pub struct StripeErrorResponse {
    /// Error details
    pub error: StripeErrorDetail,
}

/// Error details inside a Stripe error envelope
#[derive(Debug, Deserialize)]
pub struct StripeErrorDetail {
    /// Human-readable error message
    pub message: Option<String>,
    /// Error type reported by Stripe
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

/// Custom error type for payment operations
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    /// Validation error on the local request
    #[error("Validation error: {0}")]
    Validation(String),

    /// The payment processor rejected our credentials
    #[error("Payment processor authentication failed")]
    AuthenticationFailed,

    /// The payment processor rate limited the request
    #[error("Rate limited by payment processor")]
    RateLimited,

    /// The referenced payment intent does not exist
    #[error("Payment intent not found")]
    IntentNotFound,

    /// The payment processor returned an error
    #[error("Payment processor error: {0}")]
    Api(String),

    /// The HTTP request to the processor failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl actix_web::ResponseError for PaymentError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            PaymentError::Validation(_) => StatusCode::BAD_REQUEST,
            PaymentError::IntentNotFound => StatusCode::NOT_FOUND,
            PaymentError::AuthenticationFailed
            | PaymentError::RateLimited
            | PaymentError::Api(_)
            | PaymentError::Http(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            PaymentError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "validation_error",
                "message": msg
            })),
            PaymentError::IntentNotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": "intent_not_found",
                "message": "Payment intent not found"
            })),
            _ => HttpResponse::BadGateway().json(serde_json::json!({
                "error": "upstream_error",
                "message": "Payment processor request failed"
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_intent_deserializes_stripe_shape() {
        let body = r#"{
            "id": "pi_3MtwBwLkdIwHu7ix28a3tqPa",
            "object": "payment_intent",
            "amount": 2000,
            "client_secret": "pi_3MtwBwLkdIwHu7ix28a3tqPa_secret_YrKJUKribcBjcG8HVhfZluoGH",
            "currency": "usd",
            "status": "requires_payment_method"
        }"#;

        let intent: PaymentIntent = serde_json::from_str(body).unwrap();
        assert_eq!(intent.id, "pi_3MtwBwLkdIwHu7ix28a3tqPa");
        assert_eq!(intent.amount, 2000);
        assert_eq!(intent.currency, "usd");
        assert_eq!(intent.status, "requires_payment_method");
        assert!(intent.client_secret.is_some());
    }

    #[test]
    fn test_stripe_error_envelope_deserializes() {
        let body = r#"{
            "error": {
                "message": "No such payment_intent: 'pi_nope'",
                "type": "invalid_request_error"
            }
        }"#;

        let envelope: StripeErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.error.message.as_deref(),
            Some("No such payment_intent: 'pi_nope'")
        );
        assert_eq!(
            envelope.error.error_type.as_deref(),
            Some("invalid_request_error")
        );
    }

    #[test]
    fn test_confirm_response_omits_unlinked_booking() {
        let response = ConfirmPaymentResponse {
            status: "succeeded".to_string(),
            amount: 12000,
            currency: "usd".to_string(),
            booking_id: None,
        };

        let value = serde_json::to_value(response).unwrap();
        assert!(value.get("booking_id").is_none());
    }
}
