//! Bearer-token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying the user id in `sub`, valid for 12 hours.
//! The keys are derived once from the configured secret and shared through
//! application state.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{auth::AuthError, AppError};

const TOKEN_TTL_HOURS: i64 = 12;

#[derive(Serialize, Deserialize)]
pub struct Claims {
    /// User id as a string, per JWT convention for `sub`.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signing and verification keys derived from the shared secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Issues a token for a user.
///
/// # Returns
/// - `Ok(String)`: Signed JWT, expiring in 12 hours
/// - `Err(AppError)`: Signing failure (treated as internal)
pub fn issue(keys: &JwtKeys, user_id: i32) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };

    jsonwebtoken::encode(&Header::default(), &claims, &keys.encoding)
        .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
}

/// Verifies a token and extracts the user id it was issued for.
///
/// Signature and expiry failures all collapse into `InvalidToken`; callers
/// never learn why a token was rejected.
///
/// # Returns
/// - `Ok(i32)`: The authenticated user id
/// - `Err(AuthError::InvalidToken)`: Token rejected
pub fn verify(keys: &JwtKeys, token: &str) -> Result<i32, AuthError> {
    let data =
        jsonwebtoken::decode::<Claims>(token, &keys.decoding, &Validation::default())
            .map_err(|_| AuthError::InvalidToken)?;

    data.claims
        .sub
        .parse::<i32>()
        .map_err(|_| AuthError::InvalidToken)
}
