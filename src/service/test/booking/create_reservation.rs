use super::*;

/// Tests a successful manual reservation.
///
/// Verifies the interval cost is computed up front at the lot's rate, the
/// spot transitions to `reserved`, and the counter drops by one.
///
/// Expected: Ok with a priced reservation
#[tokio::test]
async fn creates_reservation_for_interval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, spots) = factory::helpers::create_booking_dependencies(db, 1, 10.0).await?;

    let start = Utc::now() + Duration::hours(1);
    let end = start + Duration::minutes(90);

    let reservation = BookingService::new(db)
        .create_reservation(spots[0].id, user.id, start, end)
        .await
        .unwrap();

    assert_eq!(reservation.spot_id, spots[0].id);
    assert_eq!(reservation.leaving_time, Some(end));
    // 1.5h charged as 2 whole hours at rate 10
    assert_eq!(reservation.parking_cost, 20.0);

    let spot = entity::prelude::ParkingSpot::find_by_id(spots[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(spot.status, entity::parking_spot::SpotStatus::Reserved);
    assert_eq!(spot.user_id, Some(user.id));
    assert_counter_consistent(db, lot.id).await;

    Ok(())
}

/// Tests rejecting an inverted interval.
///
/// Nothing may be mutated when validation fails: the spot stays available
/// and the counter untouched.
///
/// Expected: Err(InvalidInterval), no state change
#[tokio::test]
async fn rejects_inverted_interval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, spots) = factory::helpers::create_booking_dependencies(db, 1, 10.0).await?;

    let start = Utc::now();
    let end = start - Duration::minutes(5);

    let result = BookingService::new(db)
        .create_reservation(spots[0].id, user.id, start, end)
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::InvalidInterval))
    ));

    let spot = entity::prelude::ParkingSpot::find_by_id(spots[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(spot.status, entity::parking_spot::SpotStatus::Available);
    assert_counter_consistent(db, lot.id).await;

    Ok(())
}

/// Tests reserving a spot that is already taken.
///
/// Expected: Err(SpotUnavailable)
#[tokio::test]
async fn rejects_unavailable_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, spots) = factory::helpers::create_booking_dependencies(db, 1, 10.0).await?;
    let other = factory::create_user(db).await?;

    let start = Utc::now();
    let end = start + Duration::hours(1);

    let service = BookingService::new(db);
    service
        .create_reservation(spots[0].id, user.id, start, end)
        .await
        .unwrap();

    let result = service
        .create_reservation(spots[0].id, other.id, start, end)
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::SpotUnavailable))
    ));
    assert_counter_consistent(db, lot.id).await;

    Ok(())
}

/// Tests referencing entities that do not exist.
///
/// Expected: Err(NotFound) for both a missing user and a missing spot
#[tokio::test]
async fn fails_for_missing_user_or_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _lot, spots) = factory::helpers::create_booking_dependencies(db, 1, 10.0).await?;

    let start = Utc::now();
    let end = start + Duration::hours(1);
    let service = BookingService::new(db);

    let result = service
        .create_reservation(spots[0].id, 999999, start, end)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service.create_reservation(999999, user.id, start, end).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
