use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::lot::LotRepository,
    error::AppError,
    model::lot::{CreateLotDto, CreateLotParams},
};

pub struct LotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a lot together with its child spots, atomically
    ///
    /// # Arguments
    /// - `dto`: Lot creation body; capacity must be at least 1
    ///
    /// # Returns
    /// - `Ok((lot, spots))`: The created lot and its spots
    /// - `Err(AppError)`: Validation or database error
    pub async fn create(
        &self,
        dto: CreateLotDto,
    ) -> Result<(entity::parking_lot::Model, Vec<entity::parking_spot::Model>), AppError> {
        if dto.number_of_slots < 1 {
            return Err(AppError::BadRequest(
                "A parking lot needs at least one slot".to_string(),
            ));
        }
        if dto.price < 0.0 {
            return Err(AppError::BadRequest(
                "Hourly price must not be negative".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let (lot, spots) = LotRepository::new(&txn)
            .create_with_spots(CreateLotParams {
                location_name: dto.location_name,
                price: dto.price,
                address: dto.address,
                pincode: dto.pincode,
                number_of_slots: dto.number_of_slots,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Created lot {} ({}) with {} spots",
            lot.id,
            lot.location_name,
            spots.len()
        );

        Ok((lot, spots))
    }

    /// Deletes a lot and everything under it, atomically
    ///
    /// Child spots go first; reservations on those spots cascade away with
    /// them. This intentionally removes active bookings too, matching the
    /// admin teardown semantics of lot deletion.
    ///
    /// # Returns
    /// - `Ok(())`: Lot deleted
    /// - `Err(AppError)`: `NotFound` or database error
    pub async fn delete(&self, lot_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !LotRepository::new(&txn).delete_with_spots(lot_id).await? {
            return Err(AppError::NotFound("Parking lot not found".to_string()));
        }

        txn.commit().await?;

        tracing::info!("Deleted lot {}", lot_id);

        Ok(())
    }
}
