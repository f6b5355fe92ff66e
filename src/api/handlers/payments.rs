use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::state::AppState;

/// Request body for payment-intent creation, price in major units
#[derive(Debug, Deserialize)]
pub struct CreatePaymentIntentRequest {
    pub price: Option<f64>,
}

/// Response carrying the gateway's opaque client secret
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    pub client_secret: String,
}

/// Forward a price to the payment gateway and return its client secret
///
/// POST /create-payment-intent
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(req): Json<CreatePaymentIntentRequest>,
) -> Result<Json<CreatePaymentIntentResponse>, ApiError> {
    let price = req
        .price
        .filter(|p| *p > 0.0)
        .ok_or_else(|| ApiError::bad_request("price must be a positive number"))?;

    // Gateway expects the amount in the currency's minor units
    let amount_minor = (price * 100.0).round() as i64;

    let client_secret = state.payments.create_intent(amount_minor, "usd").await?;

    Ok(Json(CreatePaymentIntentResponse { client_secret }))
}
