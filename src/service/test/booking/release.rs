use super::*;

/// Tests the full book-then-release round trip.
///
/// Verifies the spot returns to `available` with its holder cleared, the
/// counter is restored to its pre-booking value, and the reservation is
/// finalized with a leaving time and at least one hour's charge.
///
/// Expected: Ok with cost >= hourly rate, state fully restored
#[tokio::test]
async fn round_trip_restores_spot_and_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, spots) = factory::helpers::create_booking_dependencies(db, 2, 10.0).await?;

    let service = BookingService::new(db);
    let booked = service.auto_book(user.id, lot.id).await.unwrap();

    let outcome = service.release(booked.id, &user, None, None).await.unwrap();

    assert!(outcome.reservation.leaving_time.is_some());
    assert!(outcome.reservation.parking_cost >= 10.0);
    assert_eq!(outcome.breakdown.charged_hours, 1);

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

/// Tests billing an elapsed stay at release time.
///
/// A stay of about 2.5 hours must be charged 3 whole hours at the lot's
/// rate.
///
/// Expected: charged_hours 3, cost 37.5 at rate 12.5
#[tokio::test]
async fn bills_elapsed_time_rounded_up() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, _spots) = factory::helpers::create_booking_dependencies(db, 1, 12.5).await?;

    let service = BookingService::new(db);
    let booked = service.auto_book(user.id, lot.id).await.unwrap();

    crate::data::reservation::ReservationRepository::new(db)
        .reset_parking_time(booked.id, Utc::now() - Duration::minutes(150))
        .await?;

    let outcome = service.release(booked.id, &user, None, None).await.unwrap();

    assert_eq!(outcome.breakdown.charged_hours, 3);
    assert_eq!(outcome.reservation.parking_cost, 37.5);

    Ok(())
}

/// Tests payment metadata storage and normalization.
///
/// Expected: transaction id stored verbatim, "qr" normalized to "UPI"
#[tokio::test]
async fn stores_normalized_payment_metadata() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, _spots) = factory::helpers::create_booking_dependencies(db, 1, 10.0).await?;

    let service = BookingService::new(db);
    let booked = service.auto_book(user.id, lot.id).await.unwrap();

    let outcome = service
        .release(
            booked.id,
            &user,
            Some("TXN-1234".to_string()),
            Some("qr".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(outcome.reservation.transaction_id.as_deref(), Some("TXN-1234"));
    assert_eq!(outcome.reservation.payment_method.as_deref(), Some("UPI"));

    Ok(())
}

/// Tests releasing a manual reservation that never progressed past `reserved`.
///
/// Manual reservations carry a planned leaving time from creation; that must
/// not count as already released. Releasing one frees the spot, restores the
/// counter, and marks it completed so a second release is refused.
///
/// Expected: Ok, spot available, counter restored, re-release AlreadyReleased
#[tokio::test]
async fn releases_manual_reservation() -> Result<(), DbErr> {
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
        .create_reservation(spots[0].id, user.id, start, start + Duration::hours(2))
        .await
        .unwrap();

    let outcome = service.release(reservation.id, &user, None, None).await.unwrap();
    assert!(outcome.reservation.completed);

    let spot = entity::prelude::ParkingSpot::find_by_id(spots[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(spot.status, entity::parking_spot::SpotStatus::Available);
    assert!(spot.user_id.is_none());
    assert_counter_consistent(db, lot.id).await;

    let again = service.release(reservation.id, &user, None, None).await;
    assert!(matches!(
        again,
        Err(AppError::BookingErr(BookingError::AlreadyReleased))
    ));

    Ok(())
}

/// Tests that a second release of the same reservation is refused.
///
/// Re-releasing would double-increment the counter; the conflict must leave
/// all state as the first release left it.
///
/// Expected: Err(AlreadyReleased), counter unchanged
#[tokio::test]
async fn rejects_second_release() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, _spots) = factory::helpers::create_booking_dependencies(db, 2, 10.0).await?;

    let service = BookingService::new(db);
    let booked = service.auto_book(user.id, lot.id).await.unwrap();
    service.release(booked.id, &user, None, None).await.unwrap();

    let result = service.release(booked.id, &user, None, None).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::AlreadyReleased))
    ));

    let lot = entity::prelude::ParkingLot::find_by_id(lot.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(lot.available_slots, 2);
    assert_counter_consistent(db, lot.id).await;

    Ok(())
}

/// Tests ownership enforcement on release.
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

    let (user, lot, _spots) = factory::helpers::create_booking_dependencies(db, 2, 10.0).await?;
    let stranger = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let service = BookingService::new(db);
    let booked = service.auto_book(user.id, lot.id).await.unwrap();

    let result = service.release(booked.id, &stranger, None, None).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service.release(booked.id, &admin, None, None).await.unwrap();
    assert_counter_consistent(db, lot.id).await;

    Ok(())
}
