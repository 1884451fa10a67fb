use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    data::{lot::LotRepository, spot::SpotRepository},
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::MessageDto,
        lot::{AvailableSpotsDto, CreateLotDto, LotDto, UpdateLotDto, UpdateLotParams},
        spot::SpotDto,
    },
    service::lot::LotService,
    state::AppState,
};

/// GET /parking-lots
/// List all lots (public)
pub async fn list_lots(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let lots = LotRepository::new(&state.db).list().await?;
    let dtos: Vec<LotDto> = lots.into_iter().map(LotDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /parking-lots/{id}
/// Get a lot (public)
pub async fn get_lot(
    State(state): State<AppState>,
    Path(lot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let lot = LotRepository::new(&state.db)
        .find_by_id(lot_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

    Ok((StatusCode::OK, Json(LotDto::from(lot))))
}

/// POST /parking-lots
/// Create a lot and its spots (admin only)
pub async fn create_lot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateLotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (lot, _spots) = LotService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(LotDto::from(lot))))
}

/// PUT /parking-lots/{id}
/// Update a lot's details (admin only; capacity is fixed)
pub async fn update_lot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lot_id): Path<i32>,
    Json(dto): Json<UpdateLotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let repo = LotRepository::new(&state.db);
    if repo.find_by_id(lot_id).await?.is_none() {
        return Err(AppError::NotFound("Parking lot not found".to_string()));
    }

    let lot = repo
        .update(
            lot_id,
            UpdateLotParams {
                location_name: dto.location_name,
                price: dto.price,
                address: dto.address,
                pincode: dto.pincode,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(LotDto::from(lot))))
}

/// DELETE /parking-lots/{id}
/// Delete a lot and its spots (admin only)
pub async fn delete_lot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    LotService::new(&state.db).delete(lot_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Parking lot deleted".to_string(),
        }),
    ))
}

/// GET /parking-lots/{id}/available-spots
/// The available spots of a lot, lowest id first (public)
pub async fn get_available_spots(
    State(state): State<AppState>,
    Path(lot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if LotRepository::new(&state.db)
        .find_by_id(lot_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Parking lot not found".to_string()));
    }

    let spots = SpotRepository::new(&state.db)
        .list_available_by_lot(lot_id)
        .await?;
    let dtos: Vec<SpotDto> = spots.into_iter().map(SpotDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(AvailableSpotsDto {
            lot_id,
            available_count: dtos.len(),
            spots: dtos,
        }),
    ))
}
