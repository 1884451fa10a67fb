use super::*;
use crate::{
    data::lot::LotRepository,
    model::lot::{CreateLotParams, UpdateLotParams},
};

/// Tests creating a lot together with its child spots.
///
/// Expected: counter seeded to capacity, exactly `number_of_slots` available
/// spots pointing at the lot
#[tokio::test]
async fn create_with_spots_seeds_counter_and_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lot, spots) = LotRepository::new(db)
        .create_with_spots(CreateLotParams {
            location_name: "North Deck".to_string(),
            price: 8.0,
            address: "1 Depot Road".to_string(),
            pincode: "560037".to_string(),
            number_of_slots: 3,
        })
        .await?;

    assert_eq!(lot.available_slots, 3);
    assert_eq!(spots.len(), 3);
    for spot in &spots {
        assert_eq!(spot.lot_id, lot.id);
        assert_eq!(spot.status, entity::parking_spot::SpotStatus::Available);
        assert!(spot.user_id.is_none());
    }

    Ok(())
}

/// Tests that updates never touch capacity or the live counter.
///
/// Expected: changed fields stored, `number_of_slots` and `available_slots`
/// unchanged
#[tokio::test]
async fn update_leaves_capacity_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::parking_lot::LotFactory::new(db)
        .slots(5)
        .build()
        .await?;

    let updated = LotRepository::new(db)
        .update(
            lot.id,
            UpdateLotParams {
                location_name: Some("Renamed Deck".to_string()),
                price: Some(20.0),
                address: None,
                pincode: None,
            },
        )
        .await?;

    assert_eq!(updated.location_name, "Renamed Deck");
    assert_eq!(updated.price, 20.0);
    assert_eq!(updated.address, lot.address);
    assert_eq!(updated.number_of_slots, 5);
    assert_eq!(updated.available_slots, lot.available_slots);

    Ok(())
}

/// Tests the underflow guard on the counter decrement.
///
/// Expected: true while the counter is positive, false at zero, counter
/// never below zero
#[tokio::test]
async fn decrement_stops_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lot, _spots) = factory::helpers::create_lot_with_spots(db, 2).await?;
    let repo = LotRepository::new(db);

    assert!(repo.decrement_available(lot.id).await?);
    assert!(repo.decrement_available(lot.id).await?);
    assert!(!repo.decrement_available(lot.id).await?);

    let lot = repo.find_by_id(lot.id).await?.unwrap();
    assert_eq!(lot.available_slots, 0);

    Ok(())
}

/// Tests the overflow guard on the counter increment.
///
/// Expected: false at capacity, true once a slot has been taken
#[tokio::test]
async fn increment_stops_at_capacity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lot, _spots) = factory::helpers::create_lot_with_spots(db, 2).await?;
    let repo = LotRepository::new(db);

    assert!(!repo.increment_available(lot.id).await?);

    repo.decrement_available(lot.id).await?;
    assert!(repo.increment_available(lot.id).await?);

    let lot = repo.find_by_id(lot.id).await?.unwrap();
    assert_eq!(lot.available_slots, 2);

    Ok(())
}

/// Tests counter updates against an unknown lot id.
///
/// Expected: false for both directions, no error
#[tokio::test]
async fn counter_updates_miss_unknown_lot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LotRepository::new(db);

    assert!(!repo.decrement_available(424242).await?);
    assert!(!repo.increment_available(424242).await?);

    Ok(())
}

/// Tests deleting a lot and its child spots.
///
/// Expected: true once, spots gone, false on a repeat
#[tokio::test]
async fn delete_with_spots_removes_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lot, spots) = factory::helpers::create_lot_with_spots(db, 2).await?;
    let repo = LotRepository::new(db);

    assert!(repo.delete_with_spots(lot.id).await?);
    assert!(!repo.delete_with_spots(lot.id).await?);

    for spot in &spots {
        assert!(entity::prelude::ParkingSpot::find_by_id(spot.id)
            .one(db)
            .await?
            .is_none());
    }

    Ok(())
}
