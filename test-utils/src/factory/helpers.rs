//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique
/// test identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a parking lot together with its child spots.
///
/// Mirrors the production lot-creation flow: the lot is inserted with
/// `number_of_slots = available_slots = spots`, then `spots` child spots are
/// inserted in `available` status. Spots come back ordered by ascending id.
///
/// # Arguments
/// - `db` - Database connection
/// - `spots` - Number of child spots (also the lot capacity)
///
/// # Returns
/// - `Ok((lot, spots))` - Created lot and its spots
/// - `Err(DbErr)` - Database error during creation
pub async fn create_lot_with_spots(
    db: &DatabaseConnection,
    spots: i32,
) -> Result<(entity::parking_lot::Model, Vec<entity::parking_spot::Model>), DbErr> {
    let lot = crate::factory::parking_lot::LotFactory::new(db)
        .slots(spots)
        .build()
        .await?;

    let mut created = Vec::with_capacity(spots as usize);
    for _ in 0..spots {
        let spot = crate::factory::parking_spot::create_spot(db, lot.id).await?;
        created.push(spot);
    }

    Ok((lot, created))
}

/// Creates the full dependency set for booking-lifecycle tests.
///
/// Creates a regular user and a lot with `spots` available spots at the
/// given hourly rate.
///
/// # Returns
/// - `Ok((user, lot, spots))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
    spots: i32,
    price: f64,
) -> Result<
    (
        entity::user::Model,
        entity::parking_lot::Model,
        Vec<entity::parking_spot::Model>,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let lot = crate::factory::parking_lot::LotFactory::new(db)
        .slots(spots)
        .price(price)
        .build()
        .await?;

    let mut created = Vec::with_capacity(spots as usize);
    for _ in 0..spots {
        created.push(crate::factory::parking_spot::create_spot(db, lot.id).await?);
    }

    Ok((user, lot, created))
}
