use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Errors from the payment gateway
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("gateway request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gateway error: {0}")]
    Gateway(String),
}

/// Narrow contract for payment-intent creation
///
/// The amount is in the currency's minor units (cents for USD). The
/// returned string is the provider's opaque client secret, handed back to
/// the caller verbatim.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_intent(&self, amount_minor: i64, currency: &str)
        -> Result<String, PaymentError>;
}

/// Stripe implementation of the payment gateway
pub struct StripeGateway {
    client: Client,
    api_url: String,
    secret_key: String,
}

impl StripeGateway {
    pub fn new(secret_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url: "https://api.stripe.com/v1/payment_intents".to_string(),
            secret_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    client_secret: String,
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<String, PaymentError> {
        let params = [
            ("amount", amount_minor.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PaymentError::Gateway(format!(
                "Intent creation failed with status {}: {}",
                status, error_text
            )));
        }

        let intent = response.json::<PaymentIntentResponse>().await?;
        Ok(intent.client_secret)
    }
}
