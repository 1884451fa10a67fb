use serde::{Deserialize, Serialize};

#[derive(Deserialize, Clone, Debug)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub vehicle_number: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Profile update body. Absent fields are left unchanged; `role` is only
/// honored for admin callers.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub vehicle_number: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<String>,
}

/// User representation returned to clients. Never carries the password hash.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
    pub vehicle_number: Option<String>,
    pub phone_number: Option<String>,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        let role = match user.role {
            entity::user::Role::Admin => "admin",
            entity::user::Role::User => "user",
        };
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: role.to_string(),
            vehicle_number: user.vehicle_number,
            phone_number: user.phone_number,
        }
    }
}

/// Successful register/login response: the bearer token plus the user it
/// authenticates.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserDto,
}

/// Parameters for inserting a user row. The password arrives already hashed.
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub role: entity::user::Role,
    pub password_hash: String,
    pub vehicle_number: Option<String>,
    pub phone_number: Option<String>,
}

/// Parameters for updating a user row. `None` fields are left unchanged.
#[derive(Default)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub vehicle_number: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<entity::user::Role>,
}
