use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{lot::LotRepository, spot::SpotRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{UpdateUserDto, UpdateUserParams},
    service::password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Updates a user profile
    ///
    /// A password change is hashed before storage. Role changes are only
    /// honored for admin callers; a non-admin sending `role` is denied
    /// rather than silently ignored.
    ///
    /// # Arguments
    /// - `user_id`: The user being updated
    /// - `dto`: Update body
    /// - `caller`: The authenticated caller, for the role-change gate
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated user
    /// - `Err(AppError)`: `NotFound`, `AccessDenied`, or a validation error
    pub async fn update(
        &self,
        user_id: i32,
        dto: UpdateUserDto,
        caller: &entity::user::Model,
    ) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let role = match dto.role.as_deref() {
            None => None,
            Some(label) => {
                if caller.role != entity::user::Role::Admin {
                    return Err(AuthError::AccessDenied(
                        caller.id,
                        "Non-admin attempted to change a user role".to_string(),
                    )
                    .into());
                }
                Some(parse_role(label)?)
            }
        };

        let password_hash = match dto.password.as_deref() {
            None => None,
            Some(plaintext) => Some(password::hash_password(plaintext)?),
        };

        let user = repo
            .update(
                user_id,
                UpdateUserParams {
                    email: dto.email,
                    password_hash,
                    vehicle_number: dto.vehicle_number,
                    phone_number: dto.phone_number,
                    role,
                },
            )
            .await?;

        Ok(user)
    }

    /// Deletes a user account, releasing anything it holds
    ///
    /// Spots the user still holds are returned to `available` with the lot
    /// counters restored, all in the same transaction as the row deletion;
    /// the user's reservations cascade away with the row. Without this the
    /// counters would drift the moment a holder disappears.
    ///
    /// # Returns
    /// - `Ok(())`: User deleted
    /// - `Err(AppError)`: `NotFound` or database error
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let held_spots = SpotRepository::new(&txn).list_held_by_user(user_id).await?;
        for spot in &held_spots {
            if SpotRepository::new(&txn).free(spot.id).await? {
                LotRepository::new(&txn)
                    .increment_available(spot.lot_id)
                    .await?;
            }
        }

        user_repo.delete(user_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted user {} and released {} held spot(s)",
            user_id,
            held_spots.len()
        );

        Ok(())
    }
}

fn parse_role(label: &str) -> Result<entity::user::Role, AppError> {
    match label {
        "admin" => Ok(entity::user::Role::Admin),
        "user" => Ok(entity::user::Role::User),
        other => Err(AppError::BadRequest(format!("Invalid role '{}'", other))),
    }
}
