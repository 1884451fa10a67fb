//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let lot = factory::parking_lot::create_lot(&db).await?;
//!
//!     // Create a lot together with its child spots
//!     let (lot, spots) = factory::helpers::create_lot_with_spots(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("boss")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let lot = factory::parking_lot::LotFactory::new(&db)
//!     .price(25.0)
//!     .slots(5)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod parking_lot;
pub mod parking_spot;
pub mod reservation;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use parking_lot::create_lot;
pub use parking_spot::create_spot;
pub use reservation::create_reservation;
pub use user::create_user;
