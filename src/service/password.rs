//! Password hashing and verification with Argon2id.
//!
//! Passwords are stored as PHC-format hash strings; the plaintext never
//! touches the database or logs.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::error::AppError;

/// Hashes a plaintext password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)`: PHC-format `$argon2id$...` hash string
/// - `Err(AppError)`: Hashing failure (treated as internal)
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Verifies a plaintext password against a stored hash.
///
/// A mismatch is a normal outcome (`Ok(false)`), not an error; only a
/// malformed stored hash or an algorithm failure errors out.
///
/// # Returns
/// - `Ok(true)`: Password matches
/// - `Ok(false)`: Password does not match
/// - `Err(AppError)`: Stored hash unparsable or verification failure
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::InternalError(format!("Stored password hash invalid: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::InternalError(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}
