use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    data::reservation::ReservationRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::MessageDto,
        reservation::{CreateReservationDto, ReservationDto},
    },
    service::booking::BookingService,
    state::AppState,
};

/// POST /reservations
/// Manual reservation with an explicit interval (self or admin against the
/// target user)
pub async fn create_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::SelfOrAdmin(dto.user_id)])
        .await?;

    let reservation = BookingService::new(&state.db)
        .create_reservation(dto.spot_id, dto.user_id, dto.parking_time, dto.leaving_time)
        .await?;

    Ok((StatusCode::CREATED, Json(ReservationDto::from(reservation))))
}

/// GET /reservations
/// List all reservations (admin only)
pub async fn list_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let reservations = ReservationRepository::new(&state.db).list().await?;
    let dtos: Vec<ReservationDto> = reservations.into_iter().map(ReservationDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /reservations/{id}
/// Get a reservation (owner or admin)
pub async fn get_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let reservation = ReservationRepository::new(&state.db)
        .find_by_id(reservation_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

    if caller.role != entity::user::Role::Admin && caller.id != reservation.user_id {
        return Err(AuthError::AccessDenied(
            caller.id,
            format!("User attempted to view reservation {}", reservation_id),
        )
        .into());
    }

    Ok((StatusCode::OK, Json(ReservationDto::from(reservation))))
}

/// DELETE /reservations/{id}
/// Cancel a reservation (owner or admin); the record is deleted
pub async fn cancel_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    BookingService::new(&state.db)
        .cancel(reservation_id, &caller)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Reservation cancelled".to_string(),
        }),
    ))
}
