use serde::{Deserialize, Serialize};

use crate::model::spot::SpotDto;

#[derive(Deserialize, Clone, Debug)]
pub struct CreateLotDto {
    pub location_name: String,
    pub price: f64,
    pub address: String,
    pub pincode: String,
    pub number_of_slots: i32,
}

/// Lot update body. Capacity is fixed at creation, so `number_of_slots` is
/// not updatable; absent fields are left unchanged.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct UpdateLotDto {
    pub location_name: Option<String>,
    pub price: Option<f64>,
    pub address: Option<String>,
    pub pincode: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct LotDto {
    pub id: i32,
    pub location_name: String,
    pub price: f64,
    pub address: String,
    pub pincode: String,
    pub number_of_slots: i32,
    pub available_slots: i32,
}

impl From<entity::parking_lot::Model> for LotDto {
    fn from(lot: entity::parking_lot::Model) -> Self {
        Self {
            id: lot.id,
            location_name: lot.location_name,
            price: lot.price,
            address: lot.address,
            pincode: lot.pincode,
            number_of_slots: lot.number_of_slots,
            available_slots: lot.available_slots,
        }
    }
}

/// Response of `GET /parking-lots/{id}/available-spots`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AvailableSpotsDto {
    pub lot_id: i32,
    pub available_count: usize,
    pub spots: Vec<SpotDto>,
}

/// Parameters for inserting a lot row. The live counter starts at capacity;
/// child spots are created alongside, in the same transaction.
pub struct CreateLotParams {
    pub location_name: String,
    pub price: f64,
    pub address: String,
    pub pincode: String,
    pub number_of_slots: i32,
}

/// Parameters for updating a lot row. `None` fields are left unchanged.
#[derive(Default)]
pub struct UpdateLotParams {
    pub location_name: Option<String>,
    pub price: Option<f64>,
    pub address: Option<String>,
    pub pincode: Option<String>,
}
