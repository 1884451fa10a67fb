//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Transaction Management**: Running every booking-lifecycle operation as one
//!   atomic unit, so the spot state machine and the lot slot counter never diverge

pub mod auth;
pub mod booking;
pub mod lot;
pub mod password;
pub mod pricing;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
