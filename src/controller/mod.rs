//! HTTP request handlers.
//!
//! Controllers validate access through the auth guard, convert request DTOs
//! into service calls, and map results back into response DTOs. No business
//! rules live here.

pub mod auth;
pub mod booking;
pub mod lot;
pub mod reservation;
pub mod spot;
pub mod user;
