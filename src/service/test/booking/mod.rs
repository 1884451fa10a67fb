use crate::{
    error::{auth::AuthError, booking::BookingError, AppError},
    service::booking::BookingService,
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod auto_book;
mod cancel;
mod create_reservation;
mod mark_occupied;
mod release;

/// Asserts the lot's live counter matches the number of its spots actually
/// in `available` status. Every lifecycle operation must leave this holding.
async fn assert_counter_consistent(db: &DatabaseConnection, lot_id: i32) {
    let lot = entity::prelude::ParkingLot::find_by_id(lot_id)
        .one(db)
        .await
        .unwrap()
        .unwrap();

    let available = entity::prelude::ParkingSpot::find()
        .filter(entity::parking_spot::Column::LotId.eq(lot_id))
        .filter(
            entity::parking_spot::Column::Status
                .eq(entity::parking_spot::SpotStatus::Available),
        )
        .count(db)
        .await
        .unwrap();

    assert_eq!(
        lot.available_slots as u64, available,
        "available_slots diverged from available spot count for lot {}",
        lot_id
    );
}
