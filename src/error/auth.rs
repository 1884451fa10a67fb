use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// A valid token referenced a user that no longer exists.
    ///
    /// Happens when an account is deleted after a token was issued. Results
    /// in a 401 Unauthorized response with a generic message so the deletion
    /// is not leaked to the token holder.
    #[error("Token subject {0} not found in database")]
    UserNotInDatabase(i32),

    /// Username/password login failed.
    ///
    /// Covers both an unknown username and a wrong password; the two are
    /// deliberately indistinguishable to the caller. Results in a
    /// 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Registration collided with an existing unique credential.
    ///
    /// Username, email, and vehicle number are all unique. Results in a
    /// 409 Conflict response with the provided message.
    #[error("{0}")]
    CredentialTaken(String),

    /// Authenticated user lacks the permission for the attempted operation.
    ///
    /// Results in a 403 Forbidden response. The detailed reason is logged
    /// server-side, not returned to the client.
    ///
    /// # Fields
    /// - User ID of the caller
    /// - Description of what was attempted, for logging
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// error messages:
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `CredentialTaken` → 409 Conflict with the specific conflict message
/// - `AccessDenied` → 403 Forbidden with a generic message
///
/// Denials are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing, invalid, or orphaned credentials
/// - 403 Forbidden - For permission violations
/// - 409 Conflict - For registration credential collisions
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!("Rejected token for deleted user {}", user_id);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::CredentialTaken(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You don't have permission to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
