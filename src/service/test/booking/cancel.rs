use super::*;

/// Tests cancelling an active booking.
///
/// The reservation row must be removed and the spot and counter restored
/// exactly as a release would restore them.
///
/// Expected: reservation gone, spot available, counter back to capacity
#[tokio::test]
async fn restores_spot_and_deletes_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, spots) = factory::helpers::create_booking_dependencies(db, 2, 10.0).await?;

    let service = BookingService::new(db);
    let booked = service.auto_book(user.id, lot.id).await.unwrap();

    service.cancel(booked.id, &user).await.unwrap();

    let reservation = entity::prelude::Reservation::find_by_id(booked.id)
        .one(db)
        .await?;
    assert!(reservation.is_none());

    let spot = entity::prelude::ParkingSpot::find_by_id(spots[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(spot.status, entity::parking_spot::SpotStatus::Available);
    assert!(spot.user_id.is_none());

    let lot = entity::prelude::ParkingLot::find_by_id(lot.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(lot.available_slots, 2);
    assert_counter_consistent(db, lot.id).await;

    Ok(())
}

/// Tests cancelling a manual reservation.
///
/// A manual reservation has a planned leaving time the moment it is created;
/// cancelling it must still succeed, delete the row, and hand the spot back.
///
/// Expected: Ok, reservation gone, spot available, counter restored
#[tokio::test]
async fn cancels_manual_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, spots) = factory::helpers::create_booking_dependencies(db, 2, 10.0).await?;

    let service = BookingService::new(db);
    let start = Utc::now();
    let reservation = service
        .create_reservation(spots[0].id, user.id, start, start + Duration::hours(3))
        .await
        .unwrap();

    service.cancel(reservation.id, &user).await.unwrap();

    let row = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?;
    assert!(row.is_none());

    let spot = entity::prelude::ParkingSpot::find_by_id(spots[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(spot.status, entity::parking_spot::SpotStatus::Available);
    assert!(spot.user_id.is_none());

    let lot = entity::prelude::ParkingLot::find_by_id(lot.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(lot.available_slots, 2);
    assert_counter_consistent(db, lot.id).await;

    Ok(())
}

/// Tests that a released reservation can no longer be cancelled.
///
/// Expected: Err(AlreadyReleased), reservation row kept
#[tokio::test]
async fn rejects_cancel_after_release() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, _spots) = factory::helpers::create_booking_dependencies(db, 1, 10.0).await?;

    let service = BookingService::new(db);
    let booked = service.auto_book(user.id, lot.id).await.unwrap();
    service.release(booked.id, &user, None, None).await.unwrap();

    let result = service.cancel(booked.id, &user).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::AlreadyReleased))
    ));

    let reservation = entity::prelude::Reservation::find_by_id(booked.id)
        .one(db)
        .await?;
    assert!(reservation.is_some());

    Ok(())
}

/// Tests ownership enforcement on cancel.
///
/// Expected: Err(AccessDenied) for a stranger, Ok for an admin
#[tokio::test]
async fn enforces_ownership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, _spots) = factory::helpers::create_booking_dependencies(db, 1, 10.0).await?;
    let stranger = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let service = BookingService::new(db);
    let booked = service.auto_book(user.id, lot.id).await.unwrap();

    let result = service.cancel(booked.id, &stranger).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service.cancel(booked.id, &admin).await.unwrap();
    assert_counter_consistent(db, lot.id).await;

    Ok(())
}

/// Tests cancelling an unknown reservation id.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_nonexistent_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = BookingService::new(db).cancel(987654, &user).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
