//! Parking spot factory for creating test spot entities.
//!
//! This module provides factory methods for creating parking spot entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use entity::parking_spot::SpotStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test parking spots with customizable fields.
///
/// Provides a builder pattern for creating spot entities with default values
/// that can be overridden as needed for specific test scenarios. A lot must
/// already exist; its id is required up front.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::parking_spot::SpotFactory;
///
/// let spot = SpotFactory::new(&db, lot.id)
///     .status(SpotStatus::Reserved)
///     .user_id(Some(user.id))
///     .build()
///     .await?;
/// ```
pub struct SpotFactory<'a> {
    db: &'a DatabaseConnection,
    lot_id: i32,
    user_id: Option<i32>,
    status: SpotStatus,
}

impl<'a> SpotFactory<'a> {
    /// Creates a new SpotFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `None`
    /// - status: `SpotStatus::Available`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `lot_id` - Parent lot the spot belongs to
    ///
    /// # Returns
    /// - `SpotFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, lot_id: i32) -> Self {
        Self {
            db,
            lot_id,
            user_id: None,
            status: SpotStatus::Available,
        }
    }

    /// Sets the holding user for the spot.
    ///
    /// # Arguments
    /// - `user_id` - Holder's user id, or `None` for an unclaimed spot
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn user_id(mut self, user_id: Option<i32>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the status for the spot.
    ///
    /// # Arguments
    /// - `status` - Spot lifecycle status
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: SpotStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the spot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::parking_spot::Model)` - Created spot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::parking_spot::Model, DbErr> {
        entity::parking_spot::ActiveModel {
            id: ActiveValue::NotSet,
            lot_id: ActiveValue::Set(self.lot_id),
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available spot in the given lot.
///
/// Shorthand for `SpotFactory::new(db, lot_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `lot_id` - Parent lot the spot belongs to
///
/// # Returns
/// - `Ok(entity::parking_spot::Model)` - Created spot entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let spot = create_spot(&db, lot.id).await?;
/// ```
pub async fn create_spot(
    db: &DatabaseConnection,
    lot_id: i32,
) -> Result<entity::parking_spot::Model, DbErr> {
    SpotFactory::new(db, lot_id).build().await
}
