//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! entity models to the service layer. Repositories are generic over the connection so the
//! same operations run against the pooled connection or inside a transaction; the booking
//! lifecycle depends on executing its status and counter updates within one transaction.

pub mod lot;
pub mod reservation;
pub mod spot;
pub mod user;

#[cfg(test)]
mod test;
