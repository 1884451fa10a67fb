use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SpotDto {
    pub id: i32,
    pub lot_id: i32,
    pub user_id: Option<i32>,
    pub status: String,
}

impl From<entity::parking_spot::Model> for SpotDto {
    fn from(spot: entity::parking_spot::Model) -> Self {
        Self {
            id: spot.id,
            lot_id: spot.lot_id,
            user_id: spot.user_id,
            status: spot_status_label(spot.status).to_string(),
        }
    }
}

/// Admin override body for a spot. Setting status to `available` clears the
/// holding user regardless of `user_id`.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct UpdateSpotDto {
    pub status: Option<String>,
    pub user_id: Option<i32>,
}

pub fn spot_status_label(status: entity::parking_spot::SpotStatus) -> &'static str {
    match status {
        entity::parking_spot::SpotStatus::Available => "available",
        entity::parking_spot::SpotStatus::Reserved => "reserved",
        entity::parking_spot::SpotStatus::Occupied => "occupied",
    }
}

/// Parses a client-supplied status label, rejecting anything outside the
/// three modeled states.
pub fn parse_spot_status(label: &str) -> Result<entity::parking_spot::SpotStatus, AppError> {
    match label {
        "available" => Ok(entity::parking_spot::SpotStatus::Available),
        "reserved" => Ok(entity::parking_spot::SpotStatus::Reserved),
        "occupied" => Ok(entity::parking_spot::SpotStatus::Occupied),
        other => Err(AppError::BadRequest(format!(
            "Invalid spot status '{}'",
            other
        ))),
    }
}
