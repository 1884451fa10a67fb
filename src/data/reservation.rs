use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::reservation::{CreateReservationParams, FinalizeReservationParams};

pub struct ReservationRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates a new reservation
    ///
    /// # Arguments
    /// - `params`: Reservation field values; auto-bookings pass a null
    ///   `leaving_time` and zero cost
    ///
    /// # Returns
    /// - `Ok(Model)`: The created reservation
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateReservationParams,
    ) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            spot_id: ActiveValue::Set(params.spot_id),
            user_id: ActiveValue::Set(params.user_id),
            parking_time: ActiveValue::Set(params.parking_time),
            leaving_time: ActiveValue::Set(params.leaving_time),
            parking_cost: ActiveValue::Set(params.parking_cost),
            transaction_id: ActiveValue::Set(None),
            payment_method: ActiveValue::Set(None),
            completed: ActiveValue::Set(false),
        }
        .insert(self.conn)
        .await
    }

    /// Gets a reservation by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The reservation
    /// - `Ok(None)`: Reservation not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.conn)
            .await
    }

    /// Lists all reservations ordered by id
    ///
    /// # Returns
    /// - `Ok(reservations)`: All reservations
    /// - `Err(DbErr)`: Database error
    pub async fn list(&self) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.conn)
            .await
    }

    /// Gets a user's active reservation, if any
    ///
    /// A reservation is active while its `leaving_time` is null (auto-booking
    /// in progress) or still in the future (manual reservation not yet
    /// elapsed). At most one should exist per user; the lowest id wins if
    /// data predates that rule.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The active reservation
    /// - `Ok(None)`: User has no active reservation
    /// - `Err(DbErr)`: Database error
    pub async fn find_active_by_user(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .filter(
                Condition::any()
                    .add(entity::reservation::Column::LeavingTime.is_null())
                    .add(entity::reservation::Column::LeavingTime.gt(now)),
            )
            .order_by_asc(entity::reservation::Column::Id)
            .one(self.conn)
            .await
    }

    /// Lists a user's reservations together with the lot each spot belongs to
    ///
    /// The lot is resolved through the reservation's spot. Reservations whose
    /// spot has since been deleted come back with no lot.
    ///
    /// # Returns
    /// - `Ok(rows)`: `(reservation, lot)` pairs, newest first
    /// - `Err(DbErr)`: Database error
    pub async fn list_by_user_with_lot(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            entity::reservation::Model,
            Option<entity::parking_lot::Model>,
        )>,
        DbErr,
    > {
        let rows = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_desc(entity::reservation::Column::Id)
            .find_also_related(entity::prelude::ParkingSpot)
            .all(self.conn)
            .await?;

        let lot_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, spot)| spot.as_ref().map(|s| s.lot_id))
            .collect();

        let lots: HashMap<i32, entity::parking_lot::Model> = entity::prelude::ParkingLot::find()
            .filter(entity::parking_lot::Column::Id.is_in(lot_ids))
            .all(self.conn)
            .await?
            .into_iter()
            .map(|lot| (lot.id, lot))
            .collect();

        Ok(rows
            .into_iter()
            .map(|(reservation, spot)| {
                let lot = spot.and_then(|s| lots.get(&s.lot_id).cloned());
                (reservation, lot)
            })
            .collect())
    }

    /// Resets a reservation's start time
    ///
    /// Used when the occupy step restarts the clock for an auto-booking.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated reservation
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn reset_parking_time(
        &self,
        id: i32,
        parking_time: DateTime<Utc>,
    ) -> Result<entity::reservation::Model, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation {} not found",
                id
            )))?;

        let mut active_model: entity::reservation::ActiveModel = reservation.into();
        active_model.parking_time = ActiveValue::Set(parking_time);

        active_model.update(self.conn).await
    }

    /// Finalizes a reservation at release time
    ///
    /// Sets the leaving time, the computed cost, the payment metadata, and
    /// the `completed` flag in one update. The row is retained as history.
    ///
    /// # Returns
    /// - `Ok(Model)`: The finalized reservation
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn finalize(
        &self,
        id: i32,
        params: FinalizeReservationParams,
    ) -> Result<entity::reservation::Model, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation {} not found",
                id
            )))?;

        let mut active_model: entity::reservation::ActiveModel = reservation.into();
        active_model.leaving_time = ActiveValue::Set(Some(params.leaving_time));
        active_model.parking_cost = ActiveValue::Set(params.parking_cost);
        active_model.transaction_id = ActiveValue::Set(params.transaction_id);
        active_model.payment_method = ActiveValue::Set(params.payment_method);
        active_model.completed = ActiveValue::Set(true);

        active_model.update(self.conn).await
    }

    /// Deletes a reservation by ID
    ///
    /// Cancellation removes the record outright; no history survives.
    ///
    /// # Returns
    /// - `Ok(())`: Reservation deleted (or absent already)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Reservation::delete_by_id(id)
            .exec(self.conn)
            .await?;
        Ok(())
    }
}
