//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! needed by the application. The state is initialized once during startup and
//! then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::service::token::JwtKeys;

/// Application state containing shared resources.
///
/// Initialized once during server startup and cloned (cheaply) for each
/// incoming request via Axum's state extraction. `DatabaseConnection` is a
/// connection pool, so clones share the pool; `JwtKeys` holds the derived
/// signing keys so the secret is only processed once.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Encoding and decoding keys for issuing and verifying bearer tokens.
    pub jwt: JwtKeys,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt_secret` - Shared secret the JWT keys are derived from
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt_secret: &str) -> Self {
        Self {
            db,
            jwt: JwtKeys::new(jwt_secret),
        }
    }
}
