use super::*;

/// Tests the occupy step of the auto-flow.
///
/// Verifies the billing clock restarts and the spot stays `occupied`, with
/// no counter movement: the slot was already accounted for at booking time.
///
/// Expected: Ok with a later parking_time, counter unchanged
#[tokio::test]
async fn restarts_clock_without_touching_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lot, _spots) = factory::helpers::create_booking_dependencies(db, 2, 10.0).await?;

    let service = BookingService::new(db);
    let booked = service.auto_book(user.id, lot.id).await.unwrap();

    // Backdate the reservation so the reset is observable.
    crate::data::reservation::ReservationRepository::new(db)
        .reset_parking_time(booked.id, Utc::now() - Duration::hours(2))
        .await?;

    let occupied = service.mark_occupied(booked.id, &user).await.unwrap();

    assert!(occupied.parking_time > Utc::now() - Duration::minutes(1));

    let lot = entity::prelude::ParkingLot::find_by_id(lot.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(lot.available_slots, 1);
    assert_counter_consistent(db, lot.id).await;

    Ok(())
}

/// Tests ownership enforcement on occupy.
///
/// Another regular user may not occupy someone else's reservation; an admin
/// may.
///
/// Expected: Err(AccessDenied) for the stranger, Ok for the admin
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

    let result = service.mark_occupied(booked.id, &stranger).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    service.mark_occupied(booked.id, &admin).await.unwrap();

    Ok(())
}

/// Tests occupying a reservation that does not exist.
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

    let result = BookingService::new(db).mark_occupied(999999, &user).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
