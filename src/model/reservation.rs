use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::round2;

/// Manual reservation create body: an explicit interval on a chosen spot.
#[derive(Deserialize, Clone, Debug)]
pub struct CreateReservationDto {
    pub spot_id: i32,
    pub user_id: i32,
    pub parking_time: DateTime<Utc>,
    pub leaving_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ReservationDto {
    pub id: i32,
    pub spot_id: i32,
    pub user_id: i32,
    pub parking_time: DateTime<Utc>,
    pub leaving_time: Option<DateTime<Utc>>,
    pub parking_cost: f64,
    pub transaction_id: Option<String>,
    pub payment_method: Option<String>,
    pub completed: bool,
}

impl From<entity::reservation::Model> for ReservationDto {
    fn from(reservation: entity::reservation::Model) -> Self {
        Self {
            id: reservation.id,
            spot_id: reservation.spot_id,
            user_id: reservation.user_id,
            parking_time: reservation.parking_time,
            leaving_time: reservation.leaving_time,
            parking_cost: round2(reservation.parking_cost),
            transaction_id: reservation.transaction_id,
            payment_method: reservation.payment_method,
            completed: reservation.completed,
        }
    }
}

/// A user's reservation enriched with the lot it sits in, for the
/// reservation-history listing.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UserReservationDto {
    #[serde(flatten)]
    pub reservation: ReservationDto,
    pub lot_id: Option<i32>,
    pub location_name: Option<String>,
    pub address: Option<String>,
}

/// Parameters for inserting a reservation row.
pub struct CreateReservationParams {
    pub spot_id: i32,
    pub user_id: i32,
    pub parking_time: DateTime<Utc>,
    pub leaving_time: Option<DateTime<Utc>>,
    pub parking_cost: f64,
}

/// Parameters for finalizing a reservation at release time.
pub struct FinalizeReservationParams {
    pub leaving_time: DateTime<Utc>,
    pub parking_cost: f64,
    pub transaction_id: Option<String>,
    pub payment_method: Option<String>,
}
