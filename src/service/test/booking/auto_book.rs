use super::*;

/// Tests a successful auto-booking.
///
/// Verifies the reservation opens with no leaving time and zero cost, the
/// spot transitions to `occupied` with the user recorded, and the lot
/// counter drops by one.
///
/// Expected: Ok with an open reservation
#[tokio::test]
async fn books_first_available_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, spots) = factory::helpers::create_booking_dependencies(db, 2, 10.0).await?;

    let reservation = BookingService::new(db)
        .auto_book(user.id, lot.id)
        .await
        .unwrap();

    assert_eq!(reservation.user_id, user.id);
    assert_eq!(reservation.spot_id, spots[0].id);
    assert!(reservation.leaving_time.is_none());
    assert_eq!(reservation.parking_cost, 0.0);

    let spot = entity::prelude::ParkingSpot::find_by_id(spots[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(spot.status, entity::parking_spot::SpotStatus::Occupied);
    assert_eq!(spot.user_id, Some(user.id));

    let lot = entity::prelude::ParkingLot::find_by_id(lot.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(lot.available_slots, 1);
    assert_counter_consistent(db, lot.id).await;

    Ok(())
}

/// Tests the deterministic spot selection order.
///
/// With the lowest-id spot taken, the next booking must pick the next id in
/// ascending order, never an arbitrary free spot.
///
/// Expected: second booking lands on the second-lowest spot id
#[tokio::test]
async fn picks_lowest_spot_id_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, spots) = factory::helpers::create_booking_dependencies(db, 3, 10.0).await?;
    let other = factory::create_user(db).await?;

    let first = BookingService::new(db).auto_book(user.id, lot.id).await.unwrap();
    let second = BookingService::new(db)
        .auto_book(other.id, lot.id)
        .await
        .unwrap();

    assert_eq!(first.spot_id, spots[0].id);
    assert_eq!(second.spot_id, spots[1].id);

    Ok(())
}

/// Tests the one-active-reservation-per-user policy.
///
/// A second auto-booking without a release in between must be refused, and
/// must not consume another spot.
///
/// Expected: Err(ActiveReservationExists), counter unchanged by the retry
#[tokio::test]
async fn rejects_second_booking_while_active() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, _spots) = factory::helpers::create_booking_dependencies(db, 3, 10.0).await?;

    BookingService::new(db).auto_book(user.id, lot.id).await.unwrap();
    let result = BookingService::new(db).auto_book(user.id, lot.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::ActiveReservationExists))
    ));

    let lot = entity::prelude::ParkingLot::find_by_id(lot.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(lot.available_slots, 2);
    assert_counter_consistent(db, lot.id).await;

    Ok(())
}

/// Tests a manual reservation with a future end also blocks auto-booking.
///
/// Active means `leaving_time` null or still in the future; a pre-paid
/// manual reservation counts.
///
/// Expected: Err(ActiveReservationExists)
#[tokio::test]
async fn future_manual_reservation_blocks_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, spots) = factory::helpers::create_booking_dependencies(db, 2, 10.0).await?;

    test_utils::factory::reservation::ReservationFactory::new(db, spots[0].id, user.id)
        .leaving_time(Some(Utc::now() + Duration::hours(2)))
        .build()
        .await?;

    let result = BookingService::new(db).auto_book(user.id, lot.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::ActiveReservationExists))
    ));

    Ok(())
}

/// Tests capacity exhaustion and recovery.
///
/// A 3-slot lot takes three bookings; the fourth fails with no spot left.
/// After one release the next booking succeeds again, on the freed spot.
///
/// Expected: NoAvailableSpot at capacity, Ok after a release
#[tokio::test]
async fn exhausts_capacity_and_recovers_after_release() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, lot, spots) = factory::helpers::create_booking_dependencies(db, 3, 10.0).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;
    let fourth = factory::create_user(db).await?;

    let service = BookingService::new(db);
    let booked = service.auto_book(first.id, lot.id).await.unwrap();
    service.auto_book(second.id, lot.id).await.unwrap();
    service.auto_book(third.id, lot.id).await.unwrap();

    let result = service.auto_book(fourth.id, lot.id).await;
    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::NoAvailableSpot))
    ));
    assert_counter_consistent(db, lot.id).await;

    service.release(booked.id, &first, None, None).await.unwrap();

    let rebooked = service.auto_book(fourth.id, lot.id).await.unwrap();
    assert_eq!(rebooked.spot_id, spots[0].id);
    assert_counter_consistent(db, lot.id).await;

    Ok(())
}

/// Tests booking against a missing lot.
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

    let user = factory::create_user(db).await?;

    let result = BookingService::new(db).auto_book(user.id, 999999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
