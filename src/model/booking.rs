use serde::{Deserialize, Serialize};

use crate::{
    model::round2,
    service::pricing::CostBreakdown,
};

#[derive(Deserialize, Clone, Debug)]
pub struct BookSpotDto {
    pub lot_id: i32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OccupySpotDto {
    pub reservation_id: i32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ReleaseSpotDto {
    pub reservation_id: i32,
    pub transaction_id: Option<String>,
    pub payment_method: Option<String>,
}

/// Cost breakdown returned by a successful release. Duration and cost are
/// rounded to 2 decimals at this boundary only.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ReleaseSummaryDto {
    pub reservation_id: i32,
    pub spot_id: i32,
    pub actual_duration_hours: f64,
    pub charged_hours: i64,
    pub hourly_rate: f64,
    pub parking_cost: f64,
    pub transaction_id: Option<String>,
    pub payment_method: Option<String>,
}

impl ReleaseSummaryDto {
    pub fn new(reservation: &entity::reservation::Model, breakdown: &CostBreakdown) -> Self {
        Self {
            reservation_id: reservation.id,
            spot_id: reservation.spot_id,
            actual_duration_hours: round2(breakdown.actual_duration_hours),
            charged_hours: breakdown.charged_hours,
            hourly_rate: breakdown.hourly_rate,
            parking_cost: round2(breakdown.total),
            transaction_id: reservation.transaction_id.clone(),
            payment_method: reservation.payment_method.clone(),
        }
    }
}
