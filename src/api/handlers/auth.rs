use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::auth::jwt::create_token;
use crate::state::AppState;

/// Request body for token issuance
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: Option<String>,
}

/// Response carrying an issued token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Issue a signed, time-limited credential for the submitted email
///
/// POST /jwt
pub async fn issue_token(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let email = req
        .email
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::bad_request("email is required"))?;

    let token = create_token(&email, &state.jwt_secret)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    Ok(Json(TokenResponse { token }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
