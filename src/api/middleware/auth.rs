use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::errors::ApiError;
use crate::auth::jwt::{verify_token, Claims};
use crate::state::AppState;

/// Verified credential context for protected routes
///
/// Extraction runs before the handler body, so a missing or invalid bearer
/// token rejects the request with 401 without touching the store. The
/// decoded claims are handed to the handler explicitly rather than stashed
/// on the request.
///
/// Usage:
/// ```ignore
/// async fn protected_handler(
///     ctx: AuthContext,
/// ) -> Result<String, ApiError> {
///     Ok(format!("Hello {}", ctx.claims.sub))
/// }
/// ```
pub struct AuthContext {
    pub claims: Claims,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthContext {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract the authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

        // Extract bearer token
        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>")
        })?;

        // Verify the token against the injected signing secret
        let claims = verify_token(token, &state.jwt_secret)
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

        Ok(AuthContext { claims })
    }
}
