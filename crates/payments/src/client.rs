use reqwest::Client;

use crate::types::{PaymentError, PaymentIntent, StripeErrorResponse};

/// Client for interacting with the Stripe payment-intent API
#[derive(Clone)]
pub struct StripeClient {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl StripeClient {
    /// Create a new Stripe API client with the given secret key
    pub fn new(secret_key: impl Into<String>) -> Result<Self, PaymentError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| PaymentError::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: "https://api.stripe.com/v1".to_string(),
            secret_key: secret_key.into(),
        })
    }

    /// Whether a secret key is present
    pub fn is_configured(&self) -> bool {
        !self.secret_key.is_empty()
    }

    /// Truncated secret key prefix, safe to expose on the debug endpoint
    pub fn key_prefix(&self) -> String {
        let prefix: String = self.secret_key.chars().take(20).collect();
        format!("{}...", prefix)
    }

    /// Creates a payment intent for the given amount in minor currency units.
    ///
    /// No idempotency key is sent, so repeated calls create distinct intents.
    pub async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        log::debug!("Creating payment intent for {} {}", amount, currency);

        let url = format!("{}/payment_intents", self.base_url);

        let params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("metadata[source]", "dock-rental-app".to_string()),
        ];

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        Self::parse_intent_response(response).await
    }

    /// Retrieves the current state of a payment intent by identifier.
    pub async fn retrieve_payment_intent(&self, id: &str) -> Result<PaymentIntent, PaymentError> {
        log::debug!("Retrieving payment intent {}", id);

        let url = format!("{}/payment_intents/{}", self.base_url, id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        Self::parse_intent_response(response).await
    }

    async fn parse_intent_response(
        response: reqwest::Response,
    ) -> Result<PaymentIntent, PaymentError> {
        let status = response.status();

        if !status.is_success() {
            match status.as_u16() {
                401 | 403 => return Err(PaymentError::AuthenticationFailed),
                404 => return Err(PaymentError::IntentNotFound),
                429 => return Err(PaymentError::RateLimited),
                _ => {
                    let message = response
                        .json::<StripeErrorResponse>()
                        .await
                        .ok()
                        .and_then(|envelope| envelope.error.message)
                        .unwrap_or_else(|| format!("HTTP {}", status));
                    return Err(PaymentError::Api(message));
                }
            }
        }

        let intent = response
            .json::<PaymentIntent>()
            .await
            .map_err(|e| PaymentError::Api(format!("Failed to parse response: {}", e)))?;

        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_prefix_is_truncated() {
        let client = StripeClient::new("sk_test_4eC39HqLyjWDarjtT1zdp7dc").unwrap();
        assert_eq!(client.key_prefix(), "sk_test_4eC39HqLyjWD...");
        assert!(client.is_configured());
    }

    #[test]
    fn test_key_prefix_handles_short_keys() {
        let client = StripeClient::new("sk_test").unwrap();
        assert_eq!(client.key_prefix(), "sk_test...");
    }
}
