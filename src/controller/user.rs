use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    data::{reservation::ReservationRepository, user::UserRepository},
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::MessageDto,
        reservation::{ReservationDto, UserReservationDto},
        user::{UpdateUserDto, UserDto},
    },
    service::user::UserService,
    state::AppState,
};

/// GET /users
/// List all users (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserRepository::new(&state.db).list().await?;
    let dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /users/{id}
/// Get a user (self or admin)
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let user = UserRepository::new(&state.db)
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// PUT /users/{id}
/// Update a user profile (self or admin; role changes admin only)
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let user = UserService::new(&state.db)
        .update(user_id, dto, &caller)
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// DELETE /users/{id}
/// Delete a user account (admin only); held spots are released
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User deleted".to_string(),
        }),
    ))
}

/// GET /users/{id}/reservations
/// A user's reservation history, enriched with lot details (self or admin)
pub async fn get_user_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    if UserRepository::new(&state.db)
        .find_by_id(user_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let rows = ReservationRepository::new(&state.db)
        .list_by_user_with_lot(user_id)
        .await?;

    let dtos: Vec<UserReservationDto> = rows
        .into_iter()
        .map(|(reservation, lot)| UserReservationDto {
            reservation: ReservationDto::from(reservation),
            lot_id: lot.as_ref().map(|l| l.id),
            location_name: lot.as_ref().map(|l| l.location_name.clone()),
            address: lot.map(|l| l.address),
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
