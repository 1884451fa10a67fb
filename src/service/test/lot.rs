use crate::{
    error::AppError,
    model::lot::CreateLotDto,
    service::lot::LotService,
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

fn lot_dto(slots: i32) -> CreateLotDto {
    CreateLotDto {
        location_name: "Central Garage".to_string(),
        price: 15.0,
        address: "12 Market Street".to_string(),
        pincode: "560001".to_string(),
        number_of_slots: slots,
    }
}

/// Tests creating a lot with its child spots.
///
/// Expected: Ok, counter seeded to capacity, one available spot per slot
#[tokio::test]
async fn creates_lot_with_spots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lot, spots) = LotService::new(db).create(lot_dto(4)).await.unwrap();

    assert_eq!(lot.number_of_slots, 4);
    assert_eq!(lot.available_slots, 4);
    assert_eq!(spots.len(), 4);
    assert!(spots
        .iter()
        .all(|s| s.status == entity::parking_spot::SpotStatus::Available && s.lot_id == lot.id));

    let stored = entity::prelude::ParkingSpot::find()
        .filter(entity::parking_spot::Column::LotId.eq(lot.id))
        .count(db)
        .await?;
    assert_eq!(stored, 4);

    Ok(())
}

/// Tests the capacity and price validation on lot creation.
///
/// Expected: Err(BadRequest) for zero slots and for a negative price
#[tokio::test]
async fn rejects_invalid_lot_parameters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LotService::new(db);

    let result = service.create(lot_dto(0)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let mut dto = lot_dto(2);
    dto.price = -1.0;
    let result = service.create(dto).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let lots = entity::prelude::ParkingLot::find().count(db).await?;
    assert_eq!(lots, 0);

    Ok(())
}

/// Tests deleting a lot and everything under it.
///
/// Expected: Ok, lot and child spots gone, unrelated lots untouched
#[tokio::test]
async fn deletes_lot_and_child_spots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (doomed, _) = factory::helpers::create_lot_with_spots(db, 3).await?;
    let (kept, _) = factory::helpers::create_lot_with_spots(db, 2).await?;

    LotService::new(db).delete(doomed.id).await.unwrap();

    assert!(entity::prelude::ParkingLot::find_by_id(doomed.id)
        .one(db)
        .await?
        .is_none());
    let orphaned = entity::prelude::ParkingSpot::find()
        .filter(entity::parking_spot::Column::LotId.eq(doomed.id))
        .count(db)
        .await?;
    assert_eq!(orphaned, 0);

    let surviving = entity::prelude::ParkingSpot::find()
        .filter(entity::parking_spot::Column::LotId.eq(kept.id))
        .count(db)
        .await?;
    assert_eq!(surviving, 2);

    Ok(())
}

/// Tests deleting an unknown lot id.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_nonexistent_lot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LotService::new(db).delete(424242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
