use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterDto},
    service::password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account
    ///
    /// Username, email, and vehicle number must all be unused; collisions
    /// are reported individually so the client can correct the right field.
    /// The password is hashed before it reaches the repository.
    ///
    /// # Arguments
    /// - `dto`: Registration request body
    ///
    /// # Returns
    /// - `Ok(Model)`: The created user
    /// - `Err(AppError)`: `CredentialTaken` on a conflict, or database error
    pub async fn register(&self, dto: RegisterDto) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_username(&dto.username).await?.is_some() {
            return Err(AuthError::CredentialTaken("Username already taken".to_string()).into());
        }
        if repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AuthError::CredentialTaken("Email already registered".to_string()).into());
        }
        if let Some(vehicle_number) = dto.vehicle_number.as_deref() {
            if repo.find_by_vehicle(vehicle_number).await?.is_some() {
                return Err(AuthError::CredentialTaken(
                    "Vehicle number already registered".to_string(),
                )
                .into());
            }
        }

        let password_hash = password::hash_password(&dto.password)?;

        let user = repo
            .create(CreateUserParams {
                username: dto.username,
                email: dto.email,
                role: entity::user::Role::User,
                password_hash,
                vehicle_number: dto.vehicle_number,
                phone_number: dto.phone_number,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Authenticates a username/password pair
    ///
    /// An unknown username and a wrong password both come back as
    /// `InvalidCredentials`; the caller cannot tell which failed.
    ///
    /// # Returns
    /// - `Ok(Model)`: The authenticated user
    /// - `Err(AppError)`: `InvalidCredentials` or database error
    pub async fn authenticate(
        &self,
        username: &str,
        plaintext_password: &str,
    ) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(plaintext_password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
