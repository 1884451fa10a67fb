//! Parking lot factory for creating test lot entities.
//!
//! This module provides factory methods for creating parking lot entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test parking lots with customizable fields.
///
/// Provides a builder pattern for creating lot entities with default values
/// that can be overridden as needed for specific test scenarios. New lots
/// start with `available_slots` equal to `number_of_slots`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::parking_lot::LotFactory;
///
/// let lot = LotFactory::new(&db)
///     .location_name("Central Garage")
///     .price(15.0)
///     .slots(4)
///     .build()
///     .await?;
/// ```
pub struct LotFactory<'a> {
    db: &'a DatabaseConnection,
    location_name: String,
    price: f64,
    address: String,
    pincode: String,
    number_of_slots: i32,
    available_slots: Option<i32>,
}

impl<'a> LotFactory<'a> {
    /// Creates a new LotFactory with default values.
    ///
    /// Defaults:
    /// - location_name: `"Lot {id}"` where id is auto-incremented
    /// - price: `10.0`
    /// - address: `"{id} Main Street"`
    /// - pincode: `"560001"`
    /// - number_of_slots: `1`
    /// - available_slots: equal to number_of_slots
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `LotFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            location_name: format!("Lot {}", id),
            price: 10.0,
            address: format!("{} Main Street", id),
            pincode: "560001".to_string(),
            number_of_slots: 1,
            available_slots: None,
        }
    }

    /// Sets the location name for the lot.
    ///
    /// # Arguments
    /// - `location_name` - Display name for the lot
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn location_name(mut self, location_name: impl Into<String>) -> Self {
        self.location_name = location_name.into();
        self
    }

    /// Sets the hourly price for the lot.
    ///
    /// # Arguments
    /// - `price` - Hourly rate charged for parking
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the street address for the lot.
    ///
    /// # Arguments
    /// - `address` - Street address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the pincode for the lot.
    ///
    /// # Arguments
    /// - `pincode` - Postal code
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn pincode(mut self, pincode: impl Into<String>) -> Self {
        self.pincode = pincode.into();
        self
    }

    /// Sets the total slot count for the lot.
    ///
    /// `available_slots` tracks this unless overridden with
    /// [`LotFactory::available_slots`].
    ///
    /// # Arguments
    /// - `slots` - Total number of spots in the lot
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn slots(mut self, slots: i32) -> Self {
        self.number_of_slots = slots;
        self
    }

    /// Overrides the available slot counter.
    ///
    /// Used in tests that need a lot mid-way through bookings without
    /// creating the matching reservations.
    ///
    /// # Arguments
    /// - `available_slots` - Counter value to store
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn available_slots(mut self, available_slots: i32) -> Self {
        self.available_slots = Some(available_slots);
        self
    }

    /// Builds and inserts the lot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::parking_lot::Model)` - Created lot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::parking_lot::Model, DbErr> {
        entity::parking_lot::ActiveModel {
            id: ActiveValue::NotSet,
            location_name: ActiveValue::Set(self.location_name),
            price: ActiveValue::Set(self.price),
            address: ActiveValue::Set(self.address),
            pincode: ActiveValue::Set(self.pincode),
            number_of_slots: ActiveValue::Set(self.number_of_slots),
            available_slots: ActiveValue::Set(self.available_slots.unwrap_or(self.number_of_slots)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a parking lot with default values.
///
/// Shorthand for `LotFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::parking_lot::Model)` - Created lot entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let lot = create_lot(&db).await?;
/// ```
pub async fn create_lot(db: &DatabaseConnection) -> Result<entity::parking_lot::Model, DbErr> {
    LotFactory::new(db).build().await
}
