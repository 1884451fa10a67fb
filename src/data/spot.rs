use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use entity::parking_spot::SpotStatus;

pub struct SpotRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> SpotRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Gets a spot by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The spot
    /// - `Ok(None)`: Spot not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::parking_spot::Model>, DbErr> {
        entity::prelude::ParkingSpot::find_by_id(id)
            .one(self.conn)
            .await
    }

    /// Lists all spots ordered by id
    ///
    /// # Returns
    /// - `Ok(spots)`: All spots
    /// - `Err(DbErr)`: Database error
    pub async fn list(&self) -> Result<Vec<entity::parking_spot::Model>, DbErr> {
        entity::prelude::ParkingSpot::find()
            .order_by_asc(entity::parking_spot::Column::Id)
            .all(self.conn)
            .await
    }

    /// Lists the available spots of a lot, ordered by ascending id
    ///
    /// # Returns
    /// - `Ok(spots)`: Spots currently in `available` status
    /// - `Err(DbErr)`: Database error
    pub async fn list_available_by_lot(
        &self,
        lot_id: i32,
    ) -> Result<Vec<entity::parking_spot::Model>, DbErr> {
        entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::LotId.eq(lot_id))
            .filter(entity::parking_spot::Column::Status.eq(SpotStatus::Available))
            .order_by_asc(entity::parking_spot::Column::Id)
            .all(self.conn)
            .await
    }

    /// Gets the lowest-id available spot of a lot
    ///
    /// The ascending-id order makes auto-booking deterministic.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The next spot to assign
    /// - `Ok(None)`: No available spot in the lot
    /// - `Err(DbErr)`: Database error
    pub async fn first_available(
        &self,
        lot_id: i32,
    ) -> Result<Option<entity::parking_spot::Model>, DbErr> {
        entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::LotId.eq(lot_id))
            .filter(entity::parking_spot::Column::Status.eq(SpotStatus::Available))
            .order_by_asc(entity::parking_spot::Column::Id)
            .one(self.conn)
            .await
    }

    /// Lists the spots a user currently holds (status not `available`)
    ///
    /// # Returns
    /// - `Ok(spots)`: Spots reserved or occupied by the user
    /// - `Err(DbErr)`: Database error
    pub async fn list_held_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::parking_spot::Model>, DbErr> {
        entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::UserId.eq(user_id))
            .filter(entity::parking_spot::Column::Status.ne(SpotStatus::Available))
            .all(self.conn)
            .await
    }

    /// Claims an available spot for a user
    ///
    /// Conditional update guarded on `status = 'available'`, so concurrent
    /// claims of the same spot resolve to at most one winner. A successful
    /// claim must be paired with a lot counter decrement in the same
    /// transaction.
    ///
    /// # Arguments
    /// - `id`: Spot ID
    /// - `user_id`: Claiming user
    /// - `status`: Target status, `reserved` or `occupied`
    ///
    /// # Returns
    /// - `Ok(true)`: Spot claimed
    /// - `Ok(false)`: Spot missing or not available
    /// - `Err(DbErr)`: Database error
    pub async fn claim(&self, id: i32, user_id: i32, status: SpotStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::ParkingSpot::update_many()
            .col_expr(entity::parking_spot::Column::Status, Expr::value(status))
            .col_expr(
                entity::parking_spot::Column::UserId,
                Expr::value(Some(user_id)),
            )
            .filter(entity::parking_spot::Column::Id.eq(id))
            .filter(entity::parking_spot::Column::Status.eq(SpotStatus::Available))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Re-marks a spot as occupied without touching the lot counter
    ///
    /// Used by the occupy step of the auto-flow; the slot was already
    /// accounted for when the spot was claimed.
    ///
    /// # Returns
    /// - `Ok(())`: Spot updated
    /// - `Err(DbErr)`: Database error
    pub async fn mark_occupied(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ParkingSpot::update_many()
            .col_expr(
                entity::parking_spot::Column::Status,
                Expr::value(SpotStatus::Occupied),
            )
            .filter(entity::parking_spot::Column::Id.eq(id))
            .exec(self.conn)
            .await?;
        Ok(())
    }

    /// Returns a claimed spot to `available` and clears its holder
    ///
    /// Conditional update guarded on `status <> 'available'`, so releasing a
    /// spot twice fails the second time instead of double-incrementing the
    /// lot counter downstream. A successful free must be paired with a lot
    /// counter increment in the same transaction.
    ///
    /// # Returns
    /// - `Ok(true)`: Spot freed
    /// - `Ok(false)`: Spot missing or already available
    /// - `Err(DbErr)`: Database error
    pub async fn free(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ParkingSpot::update_many()
            .col_expr(
                entity::parking_spot::Column::Status,
                Expr::value(SpotStatus::Available),
            )
            .col_expr(
                entity::parking_spot::Column::UserId,
                Expr::value(None::<i32>),
            )
            .filter(entity::parking_spot::Column::Id.eq(id))
            .filter(entity::parking_spot::Column::Status.ne(SpotStatus::Available))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Applies an admin override to a spot's status and holder
    ///
    /// Bypasses the state machine; intended for manual correction only. The
    /// lot counter is not adjusted, the admin issuing the override is
    /// expected to repair it alongside the spot if needed.
    ///
    /// # Arguments
    /// - `id`: Spot ID
    /// - `status`: New status, if changing
    /// - `user_id`: New holder, if changing (`available` always clears it)
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated spot
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn override_state(
        &self,
        id: i32,
        status: Option<SpotStatus>,
        user_id: Option<i32>,
    ) -> Result<entity::parking_spot::Model, DbErr> {
        let spot = entity::prelude::ParkingSpot::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Spot {} not found", id)))?;

        let mut active_model: entity::parking_spot::ActiveModel = spot.into();

        if let Some(status) = status {
            active_model.status = ActiveValue::Set(status);
            if status == SpotStatus::Available {
                active_model.user_id = ActiveValue::Set(None);
            }
        }
        if let Some(user_id) = user_id {
            active_model.user_id = ActiveValue::Set(Some(user_id));
        }

        active_model.update(self.conn).await
    }
}
