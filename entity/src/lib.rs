//! SeaORM entity definitions for the parkboard database schema.
//!
//! The schema has four tables: `user`, `parking_lot`, `parking_spot`, and
//! `reservation`. A lot owns its spots (created together, deleted together);
//! a spot transiently references the user occupying it; a reservation binds
//! a user to a spot for a booking cycle.

pub mod parking_lot;
pub mod parking_spot;
pub mod prelude;
pub mod reservation;
pub mod user;
