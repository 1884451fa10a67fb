use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        booking::{BookSpotDto, OccupySpotDto, ReleaseSpotDto, ReleaseSummaryDto},
        reservation::ReservationDto,
    },
    service::booking::BookingService,
    state::AppState,
};

/// POST /booking/book-spot
/// Auto-book the next available spot in a lot for the caller
pub async fn book_spot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<BookSpotDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let reservation = BookingService::new(&state.db)
        .auto_book(caller.id, dto.lot_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ReservationDto::from(reservation))))
}

/// POST /booking/occupy-spot
/// Mark an auto-booked spot as occupied; restarts the billing clock
pub async fn occupy_spot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<OccupySpotDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let reservation = BookingService::new(&state.db)
        .mark_occupied(dto.reservation_id, &caller)
        .await?;

    Ok((StatusCode::OK, Json(ReservationDto::from(reservation))))
}

/// POST /booking/release-spot
/// Release a spot and bill the stay; returns the cost breakdown
pub async fn release_spot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<ReleaseSpotDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = BookingService::new(&state.db)
        .release(
            dto.reservation_id,
            &caller,
            dto.transaction_id,
            dto.payment_method,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ReleaseSummaryDto::new(&outcome.reservation, &outcome.breakdown)),
    ))
}
