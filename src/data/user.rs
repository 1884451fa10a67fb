use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::user::{CreateUserParams, UpdateUserParams};

pub struct UserRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates a new user
    ///
    /// # Arguments
    /// - `params`: User field values, with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Model)`: The created user
    /// - `Err(DbErr)`: Database error (including unique-constraint violations)
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            role: ActiveValue::Set(params.role),
            password_hash: ActiveValue::Set(params.password_hash),
            vehicle_number: ActiveValue::Set(params.vehicle_number),
            phone_number: ActiveValue::Set(params.phone_number),
        }
        .insert(self.conn)
        .await
    }

    /// Gets a user by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The user
    /// - `Ok(None)`: User not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.conn).await
    }

    /// Gets a user by username
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The user
    /// - `Ok(None)`: No user with that username
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.conn)
            .await
    }

    /// Gets a user by email
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The user
    /// - `Ok(None)`: No user with that email
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.conn)
            .await
    }

    /// Gets a user by vehicle number
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The user
    /// - `Ok(None)`: No user registered that vehicle
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_vehicle(
        &self,
        vehicle_number: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::VehicleNumber.eq(vehicle_number))
            .one(self.conn)
            .await
    }

    /// Lists all users ordered by id
    ///
    /// # Returns
    /// - `Ok(users)`: All users
    /// - `Err(DbErr)`: Database error
    pub async fn list(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.conn)
            .await
    }

    /// Updates a user
    ///
    /// # Arguments
    /// - `id`: User ID
    /// - `params`: Fields to change; `None` fields are left unchanged
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated user
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn update(
        &self,
        id: i32,
        params: UpdateUserParams,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();

        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = params.password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(vehicle_number) = params.vehicle_number {
            active_model.vehicle_number = ActiveValue::Set(Some(vehicle_number));
        }
        if let Some(phone_number) = params.phone_number {
            active_model.phone_number = ActiveValue::Set(Some(phone_number));
        }
        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(role);
        }

        active_model.update(self.conn).await
    }

    /// Deletes a user by ID
    ///
    /// # Returns
    /// - `Ok(())`: User deleted (or absent already)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id)
            .exec(self.conn)
            .await?;
        Ok(())
    }
}
