use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::lot::{CreateLotParams, UpdateLotParams};

pub struct LotRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> LotRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates a new lot together with its child spots
    ///
    /// Inserts the lot with `available_slots = number_of_slots`, then inserts
    /// exactly `number_of_slots` child spots in `available` status. Spots are
    /// never created independently. Run this on a transaction so a failed
    /// spot insert rolls the lot back too.
    ///
    /// # Arguments
    /// - `params`: Lot field values
    ///
    /// # Returns
    /// - `Ok((lot, spots))`: The created lot and its spots
    /// - `Err(DbErr)`: Database error
    pub async fn create_with_spots(
        &self,
        params: CreateLotParams,
    ) -> Result<(entity::parking_lot::Model, Vec<entity::parking_spot::Model>), DbErr> {
        let lot = entity::parking_lot::ActiveModel {
            id: ActiveValue::NotSet,
            location_name: ActiveValue::Set(params.location_name),
            price: ActiveValue::Set(params.price),
            address: ActiveValue::Set(params.address),
            pincode: ActiveValue::Set(params.pincode),
            number_of_slots: ActiveValue::Set(params.number_of_slots),
            available_slots: ActiveValue::Set(params.number_of_slots),
        }
        .insert(self.conn)
        .await?;

        let mut spots = Vec::with_capacity(Ord::max(params.number_of_slots, 0) as usize);
        for _ in 0..params.number_of_slots {
            let spot = entity::parking_spot::ActiveModel {
                id: ActiveValue::NotSet,
                lot_id: ActiveValue::Set(lot.id),
                user_id: ActiveValue::Set(None),
                status: ActiveValue::Set(entity::parking_spot::SpotStatus::Available),
            }
            .insert(self.conn)
            .await?;
            spots.push(spot);
        }

        Ok((lot, spots))
    }

    /// Gets a lot by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The lot
    /// - `Ok(None)`: Lot not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::parking_lot::Model>, DbErr> {
        entity::prelude::ParkingLot::find_by_id(id)
            .one(self.conn)
            .await
    }

    /// Lists all lots ordered by id
    ///
    /// # Returns
    /// - `Ok(lots)`: All lots
    /// - `Err(DbErr)`: Database error
    pub async fn list(&self) -> Result<Vec<entity::parking_lot::Model>, DbErr> {
        entity::prelude::ParkingLot::find()
            .order_by_asc(entity::parking_lot::Column::Id)
            .all(self.conn)
            .await
    }

    /// Updates a lot
    ///
    /// Capacity (`number_of_slots`) and the live counter are never touched
    /// here; the counter only moves through [`Self::decrement_available`] /
    /// [`Self::increment_available`] alongside a spot status transition.
    ///
    /// # Arguments
    /// - `id`: Lot ID
    /// - `params`: Fields to change; `None` fields are left unchanged
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated lot
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn update(
        &self,
        id: i32,
        params: UpdateLotParams,
    ) -> Result<entity::parking_lot::Model, DbErr> {
        let lot = entity::prelude::ParkingLot::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Lot {} not found", id)))?;

        let mut active_model: entity::parking_lot::ActiveModel = lot.into();

        if let Some(location_name) = params.location_name {
            active_model.location_name = ActiveValue::Set(location_name);
        }
        if let Some(price) = params.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(address);
        }
        if let Some(pincode) = params.pincode {
            active_model.pincode = ActiveValue::Set(pincode);
        }

        active_model.update(self.conn).await
    }

    /// Deletes a lot and all of its child spots
    ///
    /// Spots are removed first; reservations referencing those spots cascade
    /// through the foreign key. Run this on a transaction.
    ///
    /// # Returns
    /// - `Ok(true)`: Lot deleted
    /// - `Ok(false)`: Lot did not exist
    /// - `Err(DbErr)`: Database error
    pub async fn delete_with_spots(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::ParkingSpot::delete_many()
            .filter(entity::parking_spot::Column::LotId.eq(id))
            .exec(self.conn)
            .await?;

        let result = entity::prelude::ParkingLot::delete_by_id(id)
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Decrements the lot's free-slot counter, guarded against underflow
    ///
    /// Conditional update: only applies while `available_slots > 0`. The
    /// caller must pair a successful decrement with a spot leaving
    /// `available` status in the same transaction.
    ///
    /// # Returns
    /// - `Ok(true)`: Counter decremented
    /// - `Ok(false)`: Lot missing or counter already at 0
    /// - `Err(DbErr)`: Database error
    pub async fn decrement_available(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ParkingLot::update_many()
            .col_expr(
                entity::parking_lot::Column::AvailableSlots,
                Expr::col(entity::parking_lot::Column::AvailableSlots).sub(1),
            )
            .filter(entity::parking_lot::Column::Id.eq(id))
            .filter(entity::parking_lot::Column::AvailableSlots.gt(0))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Increments the lot's free-slot counter, guarded against overflow
    ///
    /// Conditional update: only applies while `available_slots` is below
    /// `number_of_slots`. The caller must pair a successful increment with a
    /// spot returning to `available` status in the same transaction.
    ///
    /// # Returns
    /// - `Ok(true)`: Counter incremented
    /// - `Ok(false)`: Lot missing or counter already at capacity
    /// - `Err(DbErr)`: Database error
    pub async fn increment_available(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ParkingLot::update_many()
            .col_expr(
                entity::parking_lot::Column::AvailableSlots,
                Expr::col(entity::parking_lot::Column::AvailableSlots).add(1),
            )
            .filter(entity::parking_lot::Column::Id.eq(id))
            .filter(
                Expr::col(entity::parking_lot::Column::AvailableSlots)
                    .lt(Expr::col(entity::parking_lot::Column::NumberOfSlots)),
            )
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
