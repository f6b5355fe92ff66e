// JWT token creation and verification
// Handles authentication tokens with 1-day expiry

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (the holder's email)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Email address (subject)
    pub sub: String,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Errors from token creation or verification
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Creates a JWT token embedding the given email
///
/// # Token Properties
/// - Expires after 1 day
/// - Signed with HS256 algorithm
/// - Contains the email in the 'sub' claim
pub fn create_token(email: &str, secret: &str) -> Result<String, TokenError> {
    let expiry = Utc::now() + Duration::days(1);
    let claims = Claims {
        sub: email.to_string(),
        exp: expiry.timestamp() as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}

/// Verifies and decodes a JWT token
///
/// Fails on a bad signature, malformed token, or expired claims.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}
