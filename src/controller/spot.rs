use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    data::spot::SpotRepository,
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::spot::{parse_spot_status, SpotDto, UpdateSpotDto},
    state::AppState,
};

/// GET /parking-spots
/// List all spots (public)
pub async fn list_spots(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let spots = SpotRepository::new(&state.db).list().await?;
    let dtos: Vec<SpotDto> = spots.into_iter().map(SpotDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /parking-spots/{id}
/// Get a spot (public)
pub async fn get_spot(
    State(state): State<AppState>,
    Path(spot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let spot = SpotRepository::new(&state.db)
        .find_by_id(spot_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Parking spot not found".to_string()))?;

    Ok((StatusCode::OK, Json(SpotDto::from(spot))))
}

/// PUT /parking-spots/{id}
/// Raw status/holder override for manual correction (admin only)
///
/// Bypasses the booking state machine and does not touch the lot counter;
/// the admin is expected to know what they are repairing.
pub async fn update_spot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(spot_id): Path<i32>,
    Json(dto): Json<UpdateSpotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let status = dto.status.as_deref().map(parse_spot_status).transpose()?;

    let repo = SpotRepository::new(&state.db);
    if repo.find_by_id(spot_id).await?.is_none() {
        return Err(AppError::NotFound("Parking spot not found".to_string()));
    }

    let spot = repo.override_state(spot_id, status, dto.user_id).await?;

    Ok((StatusCode::OK, Json(SpotDto::from(spot))))
}
