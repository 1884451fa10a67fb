use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::token::{self, JwtKeys},
};

pub enum Permission {
    /// Caller must hold the admin role.
    Admin,
    /// Caller must be the named user, or an admin.
    SelfOrAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Authenticates the request and checks the required permissions.
    ///
    /// Resolves the bearer token to a user row, then verifies every listed
    /// permission. An empty permission list means "any authenticated user".
    ///
    /// # Returns
    /// - `Ok(Model)`: The authenticated user
    /// - `Err(AppError)`: 401 for token problems, 403 for permission
    ///   violations
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let user_id = token::verify(self.jwt, token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != entity::user::Role::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Admin role required for this operation".to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(target_user_id) => {
                    if user.role != entity::user::Role::Admin && user.id != *target_user_id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User attempted to act on user {}", target_user_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
