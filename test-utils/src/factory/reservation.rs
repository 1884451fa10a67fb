//! Reservation factory for creating test reservation entities.
//!
//! This module provides factory methods for creating reservation entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// Provides a builder pattern for creating reservation entities with default
/// values that can be overridden as needed for specific test scenarios. The
/// spot and user must already exist; their ids are required up front.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, spot.id, user.id)
///     .leaving_time(Some(Utc::now()))
///     .parking_cost(20.0)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    spot_id: i32,
    user_id: i32,
    parking_time: DateTime<Utc>,
    leaving_time: Option<DateTime<Utc>>,
    parking_cost: f64,
    transaction_id: Option<String>,
    payment_method: Option<String>,
    completed: bool,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - parking_time: now
    /// - leaving_time: `None` (active reservation)
    /// - parking_cost: `0.0`
    /// - transaction_id: `None`
    /// - payment_method: `None`
    /// - completed: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `spot_id` - Spot the reservation is for
    /// - `user_id` - User holding the reservation
    ///
    /// # Returns
    /// - `ReservationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, spot_id: i32, user_id: i32) -> Self {
        Self {
            db,
            spot_id,
            user_id,
            parking_time: Utc::now(),
            leaving_time: None,
            parking_cost: 0.0,
            transaction_id: None,
            payment_method: None,
            completed: false,
        }
    }

    /// Sets the parking start time.
    ///
    /// # Arguments
    /// - `parking_time` - When the reservation starts
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn parking_time(mut self, parking_time: DateTime<Utc>) -> Self {
        self.parking_time = parking_time;
        self
    }

    /// Sets the leaving time.
    ///
    /// Manual reservations carry one from the start; completion is tracked
    /// separately through [`completed`](Self::completed).
    ///
    /// # Arguments
    /// - `leaving_time` - End of the reserved interval, or `None`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn leaving_time(mut self, leaving_time: Option<DateTime<Utc>>) -> Self {
        self.leaving_time = leaving_time;
        self
    }

    /// Sets the billed parking cost.
    ///
    /// # Arguments
    /// - `parking_cost` - Total charge for the stay
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn parking_cost(mut self, parking_cost: f64) -> Self {
        self.parking_cost = parking_cost;
        self
    }

    /// Sets the payment transaction id.
    ///
    /// # Arguments
    /// - `transaction_id` - External payment reference
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn transaction_id(mut self, transaction_id: Option<String>) -> Self {
        self.transaction_id = transaction_id;
        self
    }

    /// Sets the payment method label.
    ///
    /// # Arguments
    /// - `payment_method` - Normalized payment method name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn payment_method(mut self, payment_method: Option<String>) -> Self {
        self.payment_method = payment_method;
        self
    }

    /// Marks the reservation as completed (already released and billed).
    ///
    /// # Arguments
    /// - `completed` - Whether the reservation has been released
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            spot_id: ActiveValue::Set(self.spot_id),
            user_id: ActiveValue::Set(self.user_id),
            parking_time: ActiveValue::Set(self.parking_time),
            leaving_time: ActiveValue::Set(self.leaving_time),
            parking_cost: ActiveValue::Set(self.parking_cost),
            transaction_id: ActiveValue::Set(self.transaction_id),
            payment_method: ActiveValue::Set(self.payment_method),
            completed: ActiveValue::Set(self.completed),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active reservation for the given spot and user.
///
/// Shorthand for `ReservationFactory::new(db, spot_id, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `spot_id` - Spot the reservation is for
/// - `user_id` - User holding the reservation
///
/// # Returns
/// - `Ok(entity::reservation::Model)` - Created reservation entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let reservation = create_reservation(&db, spot.id, user.id).await?;
/// ```
pub async fn create_reservation(
    db: &DatabaseConnection,
    spot_id: i32,
    user_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, spot_id, user_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::parking_lot::create_lot;
    use crate::factory::parking_spot::create_spot;
    use crate::factory::user::create_user;
    use chrono::Duration;

    #[tokio::test]
    async fn creates_active_reservation_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_parking_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let lot = create_lot(db).await?;
        let spot = create_spot(db, lot.id).await?;
        let user = create_user(db).await?;

        let reservation = create_reservation(db, spot.id, user.id).await?;

        assert_eq!(reservation.spot_id, spot.id);
        assert_eq!(reservation.user_id, user.id);
        assert!(reservation.leaving_time.is_none());
        assert!(!reservation.completed);
        assert_eq!(reservation.parking_cost, 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn creates_completed_reservation() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_parking_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let lot = create_lot(db).await?;
        let spot = create_spot(db, lot.id).await?;
        let user = create_user(db).await?;

        let start = Utc::now() - Duration::hours(2);
        let reservation = ReservationFactory::new(db, spot.id, user.id)
            .parking_time(start)
            .leaving_time(Some(Utc::now()))
            .parking_cost(20.0)
            .payment_method(Some("UPI".to_string()))
            .completed(true)
            .build()
            .await?;

        assert!(reservation.leaving_time.is_some());
        assert!(reservation.completed);
        assert_eq!(reservation.parking_cost, 20.0);
        assert_eq!(reservation.payment_method.as_deref(), Some("UPI"));

        Ok(())
    }
}
